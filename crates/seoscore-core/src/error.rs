//! Error types for seoscore-core.
//!
//! Scoring itself never fails; these cover configuration and page-record
//! loading only.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A score threshold is outside the 0-100 scale.
    #[error("invalid configuration: {key} must be between 0 and {max}, got {value}")]
    OutOfRange {
        /// The offending setting.
        key: &'static str,
        /// The value that was loaded.
        value: u8,
        /// Highest accepted value.
        max: u8,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when loading a page record to score.
#[derive(Error, Debug)]
pub enum InputError {
    /// A page record file could not be read or did not match the expected shape.
    #[error("invalid page record {path}: {source}")]
    Deserialize {
        /// The file that failed to load.
        path: Utf8PathBuf,
        /// The underlying figment error.
        source: Box<figment::Error>,
    },

    /// An in-memory JSON page record could not be parsed.
    #[error("invalid page record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
