//! CLI-specific error type

use thiserror::Error;

use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Store or circulation failure, reported as-is
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Configuration problem
    #[error("config error: {0}")]
    Config(String),
}

impl CliError {
    /// Create a config error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
