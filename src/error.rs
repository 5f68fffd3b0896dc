//! Error types for Slotwise
//!
//! Resolution itself never fails; these cover loading configuration from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Slotwise operations
pub type SlotwiseResult<T> = Result<T, SlotwiseError>;

#[derive(Error, Debug)]
pub enum SlotwiseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML for our schema
    #[error("invalid canvas config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config names a template we do not ship
    #[error("unknown template '{name}' in {source_name}{}", did_you_mean(.suggestion))]
    UnknownTemplate {
        name: String,
        source_name: String,
        suggestion: Option<String>,
    },

    /// `--config` pointed at a file that does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}
