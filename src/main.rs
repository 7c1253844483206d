// src/main.rs

//! # mdns-herald Main Entry Point
//!
//! This is the main entry point for mdns-herald. It initializes configuration
//! and logging, loads the alias list, and hands control to the external mDNS
//! publisher.
//!
//! ## Modules
//!
//! - [`config`]: Handles configuration loading and merging from CLI, file, and environment.
//! - [`aliases`]: Loads the alias list from the line-oriented alias file.
//! - [`launcher`]: Launches the publisher and propagates its exit status.
//! - [`error`]: Error taxonomy for alias loading and launching.

mod aliases;
mod config;
mod error;
mod launcher;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;

/// The main entry point for mdns-herald.
///
/// This function performs the following steps:
/// 1. Loads the application configuration from CLI, file, and environment.
/// 2. Initializes the tracing subscriber for logging.
/// 3. Loads the alias list, either from the command line or the alias file.
/// 4. On an empty list, reports "no aliases" and exits without launching.
/// 5. Otherwise launches the publisher with the aliases as arguments; on Unix
///    this replaces the current process image, elsewhere the publisher's exit
///    status is propagated.
///
/// # Returns
/// Returns `Ok(())` on the empty-list no-op and on `--dry-run`; all other
/// paths either exit explicitly or never return.
fn main() -> Result<()> {
    let app_config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing subscriber for logging with environment filter and max level.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&app_config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr) // Log to stderr
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Setting default tracing subscriber failed");

    tracing::info!("mdns-herald starting with configuration: {:?}", app_config);

    // Aliases given on the command line bypass the alias file.
    let aliases = if !app_config.cli_aliases.is_empty() {
        app_config.cli_aliases.clone()
    } else {
        match aliases::load_aliases(&app_config.aliases_file) {
            Ok(aliases) => aliases,
            Err(e) => {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
    };

    if aliases.is_empty() {
        if app_config.require_aliases {
            tracing::error!(
                "No aliases found in {}",
                app_config.aliases_file.display()
            );
            std::process::exit(1);
        }
        tracing::warn!(
            "No aliases found in {}; nothing to publish",
            app_config.aliases_file.display()
        );
        return Ok(());
    }

    if app_config.dry_run {
        println!("{}", launcher::argv(&app_config.publisher, &aliases));
        return Ok(());
    }

    tracing::info!(
        "Publishing {} aliases via {}",
        aliases.len(),
        app_config.publisher.display()
    );
    match launcher::launch(&app_config.publisher, &aliases) {
        // Only reachable on targets without process replacement.
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
