//! Init command implementation.

use markvault_profile::{ProfileBootstrap, SettingsStore, SyncProfile, SENTINEL_NAME};

/// Bootstraps the transport and verifies the sentinel.
pub fn run<P: SyncProfile, S: SettingsStore>(
    boot: &ProfileBootstrap<P, S>,
) -> Result<(), Box<dyn std::error::Error>> {
    let profile = boot.profile().identity();
    tracing::info!(profile = profile.target_name(), "bootstrapping transport");

    let handle = boot.init_transport()?;

    // init_transport already healed the sentinel; read it back so the
    // operator sees the verified state.
    match handle.get(SENTINEL_NAME)? {
        Some(_) => println!(
            "{} target ready: sentinel verified at {}",
            profile.label(),
            SENTINEL_NAME
        ),
        None => println!(
            "{} target ready, but the sentinel is missing; another client may be deleting files",
            profile.label()
        ),
    }
    Ok(())
}
