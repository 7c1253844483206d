// src/error.rs
use std::io;
use std::path::PathBuf;

/// Errors for alias loading and publisher launching.
#[derive(Debug, thiserror::Error)]
pub enum HeraldError {
    /// Configuration could not be assembled from CLI, file, and environment.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// The alias list file could not be opened or read.
    #[error("cannot read alias file {path}: {source}")]
    AliasFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The publisher executable could not be launched.
    #[error("cannot launch publisher {program}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}
