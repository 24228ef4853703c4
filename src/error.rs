//! Error types for textpeek.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading bytes for a preview.
///
/// The text view swallows these and shows nothing; they only reach the log.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// The file could not be opened (missing, permission denied, ...).
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but reading failed (e.g. it is a directory).
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),

    /// Failed to serialize the config.
    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[source] toml::ser::Error),

    /// Failed to write the config file.
    #[error("Failed to write config file: {0}")]
    WriteFailed(#[source] std::io::Error),
}
