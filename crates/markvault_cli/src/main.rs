//! Markvault CLI
//!
//! Command-line client for markvault sync targets.
//!
//! # Commands
//!
//! - `check-config` - Validate connection parameters against the remote
//! - `init` - Bootstrap the transport and verify the sentinel
//! - `sync` - Run one synchronization pass for a local directory

mod commands;

use clap::{Parser, Subcommand};
use markvault_profile::{
    setting_key, MemorySettings, NextcloudProfile, ProfileBootstrap, SyncProfile, WebdavProfile,
    APP_TYPE_KEY, IGNORE_TLS_KEY,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Markvault command-line sync client.
#[derive(Parser)]
#[command(name = "markvault")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Remote endpoint URL
    #[arg(global = true, long)]
    endpoint: Option<String>,

    /// Username for the remote
    #[arg(global = true, long)]
    username: Option<String>,

    /// Password (or app password) for the remote
    #[arg(global = true, long)]
    password: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(global = true, long)]
    ignore_tls_errors: bool,

    /// Sync target (nextcloud, webdav)
    #[arg(global = true, long, default_value = "nextcloud")]
    target: String,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate connection parameters against the remote
    CheckConfig {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Bootstrap the transport and verify the sentinel
    Init,

    /// Run one synchronization pass for a local directory
    Sync {
        /// Directory holding the local Markdown items
        #[arg(short, long)]
        local_dir: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.target.as_str() {
        "nextcloud" => run(NextcloudProfile, cli),
        "webdav" => run(WebdavProfile, cli),
        other => Err(format!("unknown sync target {:?} (expected nextcloud or webdav)", other).into()),
    }
}

fn run<P: SyncProfile>(profile: P, cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings_from_args(&cli, profile.identity().id());
    let config = markvault_transport::WebdavConfig::new(cli.endpoint.clone().unwrap_or_default())
        .with_credentials(
            cli.username.clone().unwrap_or_default(),
            cli.password.clone().unwrap_or_default(),
        )
        .with_ignore_tls_errors(cli.ignore_tls_errors);
    let boot = ProfileBootstrap::new(profile, settings);

    match cli.command {
        Commands::CheckConfig { format } => commands::check_config::run(&boot, &config, &format),
        Commands::Init => commands::init::run(&boot),
        Commands::Sync { local_dir } => commands::sync::run(&boot, &local_dir),
        Commands::Version => {
            println!("markvault v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Assembles the settings store the bootstrap reads from.
fn settings_from_args(cli: &Cli, profile_id: u32) -> MemorySettings {
    let settings = MemorySettings::new();
    if let Some(endpoint) = &cli.endpoint {
        settings.set(setting_key(profile_id, "path"), endpoint);
    }
    if let Some(username) = &cli.username {
        settings.set(setting_key(profile_id, "username"), username);
    }
    if let Some(password) = &cli.password {
        settings.set(setting_key(profile_id, "password"), password);
    }
    if cli.ignore_tls_errors {
        settings.set(IGNORE_TLS_KEY, "true");
    }
    settings.set(APP_TYPE_KEY, "cli");
    settings
}
