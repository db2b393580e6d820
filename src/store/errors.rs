//! Store error types
//!
//! Every variant surfaces to the client as the same opaque 500
//! envelope; the detail below lands in the structured log only.

use thiserror::Error;

use super::config::CONN_STRING_ENV;

/// Errors surfaced by store backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// The environment provided no connection string
    #[error("connection string missing (set {} in the environment)", CONN_STRING_ENV)]
    MissingConnString,

    /// Establishing the first connection failed
    #[error("store connection failed: {0}")]
    Connect(#[source] mongodb::error::Error),

    /// A driver-level operation failed
    #[error("store operation failed: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// A document could not be encoded for the store
    #[error("document encoding failed: {0}")]
    Encode(String),

    /// Backend-internal failure
    #[error("{0}")]
    Internal(String),
}
