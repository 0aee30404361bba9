//! Sync command implementation.

use markvault_engine::{EngineError, EngineResult, LocalStore};
use markvault_profile::{ProfileBootstrap, SettingsStore, SyncProfile};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Bootstraps the transport and runs one synchronization pass over a
/// local directory.
pub fn run<P: SyncProfile, S: SettingsStore>(
    boot: &ProfileBootstrap<P, S>,
    local_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let handle = boot.init_transport()?;
    let local = DirStore::new(local_dir.to_path_buf());
    let engine = boot.init_engine(Box::new(local), handle);

    let report = engine.sync()?;
    println!(
        "sync complete: {} pushed, {} pulled",
        report.pushed, report.pulled
    );
    Ok(())
}

/// Local store backed by the files in one directory.
///
/// Every regular file is an item; subdirectories are ignored.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Creates a store over the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn local_err(e: std::io::Error) -> EngineError {
        EngineError::Local(e.to_string())
    }
}

impl LocalStore for DirStore {
    fn items(&self) -> EngineResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(Self::local_err)? {
            let entry = entry.map_err(Self::local_err)?;
            if entry.file_type().map_err(Self::local_err)?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn content(&self, name: &str) -> EngineResult<Option<String>> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::local_err(e)),
        }
    }

    fn upsert(&self, name: &str, content: &str) -> EngineResult<()> {
        fs::write(self.root.join(name), content).map_err(Self::local_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_store_lists_only_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "alpha").unwrap();
        fs::create_dir(dir.path().join("attachments")).unwrap();

        let store = DirStore::new(dir.path().to_path_buf());
        assert_eq!(store.items().unwrap(), vec!["a.md"]);
    }

    #[test]
    fn dir_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::new(dir.path().to_path_buf());

        assert!(store.content("note.md").unwrap().is_none());
        store.upsert("note.md", "# Note").unwrap();
        assert_eq!(store.content("note.md").unwrap().as_deref(), Some("# Note"));
    }

    #[test]
    fn missing_directory_is_a_local_error() {
        let store = DirStore::new(PathBuf::from("/nonexistent/markvault-test"));
        assert!(matches!(store.items(), Err(EngineError::Local(_))));
    }
}
