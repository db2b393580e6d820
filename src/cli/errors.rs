//! CLI-specific error types
//!
//! Every CLI error is fatal; the process exits non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// The async runtime could not be created
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The server failed to bind or serve
    #[error("server error: {0}")]
    Server(#[source] std::io::Error),
}
