//! CLI-level errors (wraps domain and config errors)

use std::collections::TryReserveError;

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::{CollectionError, DescriptorError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Descriptor(#[from] DescriptorError),

    #[error("{0}")]
    Collection(#[from] CollectionError),

    #[error("config error: {0}")]
    Settings(#[from] SettingsError),

    #[error("cannot reserve {requested} node slots: {source}")]
    Capacity {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("no node with key '{key}' at or after index {from}")]
    NotFound { key: String, from: usize },

    #[error("render failed: {0}")]
    Render(String),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Descriptor(_) => crate::exitcode::DATAERR,
            CliError::Settings(_) | CliError::Capacity { .. } => crate::exitcode::CONFIG,
            CliError::NotFound { .. } => crate::exitcode::NOT_FOUND,
            CliError::Collection(_) | CliError::Render(_) => crate::exitcode::SOFTWARE,
        }
    }
}
