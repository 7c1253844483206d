// src/config.rs
use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line arguments for the application.
#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the mDNS publisher executable
    #[clap(
        short,
        long,
        value_parser,
        help = "Path to the mDNS publisher executable (e.g., \"mdns-publish-cname\")"
    )]
    pub publisher: Option<PathBuf>,

    /// Path to the alias list file
    #[clap(
        short = 'f',
        long,
        value_parser,
        help = "Path to the alias list file, one alias per line"
    )]
    pub aliases_file: Option<PathBuf>,

    /// Treat an empty alias list as an error
    #[clap(
        short,
        long,
        help = "Treat an empty alias list as an error instead of a no-op"
    )]
    pub require_aliases: bool,

    /// Print the command that would be launched and exit
    #[clap(short, long, help = "Print the command that would be launched and exit")]
    pub dry_run: bool,

    /// Path to a configuration file (e.g., mdns-herald.toml)
    #[clap(
        short,
        long,
        value_parser,
        help = "Path to a configuration file (e.g., mdns-herald.toml)"
    )]
    pub config: Option<PathBuf>,

    /// Aliases to publish, bypassing the alias file
    #[clap(help = "Aliases to publish, bypassing the alias file")]
    pub aliases: Vec<String>,

    /// Log level (e.g., trace, debug, info, warn, error)
    #[clap(
        long,
        value_parser,
        help = "Log level (e.g., trace, debug, info, warn, error)"
    )]
    pub log_level: Option<String>,
}

/// Configuration loaded from file, environment, or defaults.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct FileConfig {
    /// Publisher executable
    pub publisher: Option<PathBuf>,
    /// Alias list file
    pub aliases_file: Option<PathBuf>,
    /// Fail on an empty alias list
    pub require_aliases: Option<bool>,
    /// Log level
    pub log_level: Option<String>,
}

/// Final application configuration after merging all sources.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// mDNS publisher executable to launch
    pub publisher: PathBuf,
    /// File the alias list is read from
    pub aliases_file: PathBuf,
    /// Whether an empty alias list is an error
    pub require_aliases: bool,
    /// Whether to print the command instead of launching it
    pub dry_run: bool,
    /// Aliases supplied on the command line, overriding the file when non-empty
    pub cli_aliases: Vec<String>,
    /// Log level
    pub log_level: String,
}

/// Default location of the alias list: `$HOME/.mdns-aliases`, or
/// `.mdns-aliases` in the working directory when `HOME` is unset.
fn default_aliases_file() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".mdns-aliases"),
        None => PathBuf::from(".mdns-aliases"),
    }
}

impl AppConfig {
    /// Loads the application configuration by merging CLI, file, environment, and defaults.
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_cli(CliArgs::parse())
    }

    /// Merges the given CLI arguments with file, environment, and default values.
    ///
    /// Precedence, lowest first: built-in defaults, `MDNS_HERALD_*`
    /// environment variables, the TOML configuration file (its
    /// `[mdns-herald]` section), CLI arguments.
    pub fn from_cli(cli_args: CliArgs) -> Result<Self, figment::Error> {
        let config_file_path = cli_args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from("mdns-herald.toml"));

        // Default log level from environment variable MDNS_HERALD_LOG_LEVEL, then "info"
        let default_log_level =
            std::env::var("MDNS_HERALD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let fig = Figment::new()
            .merge(Serialized::defaults(FileConfig {
                // These are the lowest precedence defaults
                publisher: Some(PathBuf::from("mdns-publish-cname")),
                aliases_file: Some(default_aliases_file()),
                require_aliases: Some(false),
                log_level: Some(default_log_level.clone()),
            }))
            .merge(Toml::file(config_file_path).nested())
            .merge(Env::prefixed("MDNS_HERALD_").map(|key| key.as_str().replace("__", ".").into()));

        // Extract the config after merging defaults, file, and env
        let mut merged_config: FileConfig = fig.select("mdns-herald").extract()?;

        // Now, apply CLI overrides explicitly
        if let Some(cli_ll) = cli_args.log_level {
            merged_config.log_level = Some(cli_ll);
        }
        if let Some(cli_publisher) = cli_args.publisher {
            merged_config.publisher = Some(cli_publisher);
        }
        if let Some(cli_file) = cli_args.aliases_file {
            merged_config.aliases_file = Some(cli_file);
        }
        // For boolean flags, CLI presence means true
        let require_aliases =
            cli_args.require_aliases || merged_config.require_aliases.unwrap_or(false);

        Ok(AppConfig {
            publisher: merged_config
                .publisher
                .unwrap_or_else(|| PathBuf::from("mdns-publish-cname")),
            aliases_file: merged_config
                .aliases_file
                .unwrap_or_else(default_aliases_file),
            require_aliases,
            dry_run: cli_args.dry_run,
            cli_aliases: cli_args.aliases,
            log_level: merged_config.log_level.unwrap_or(default_log_level),
        })
    }
}
