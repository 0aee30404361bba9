//! Check-config command implementation.

use markvault_profile::{ProfileBootstrap, SettingsStore, SyncProfile};
use markvault_transport::WebdavConfig;

/// Runs the configuration check and prints the result.
///
/// A failing check is reported through the exit code as well as the
/// output, so scripts can gate on it.
pub fn run<P: SyncProfile, S: SettingsStore>(
    boot: &ProfileBootstrap<P, S>,
    config: &WebdavConfig,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = boot.check_config(config);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            if result.success {
                println!("configuration OK: {}", config.endpoint);
            } else {
                println!(
                    "configuration check failed: {}",
                    result.message.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    if result.success {
        Ok(())
    } else {
        Err("configuration check failed".into())
    }
}
