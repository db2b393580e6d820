//! # Document store
//!
//! The store is a seam: the HTTP surface and the validator talk to
//! [`MemberStore`], never to a concrete backend. [`MongoStore`] is the
//! production backend; [`MemoryStore`] holds documents in process
//! memory and backs the test suite.
//!
//! Documents come back as plain JSON values with the store identifier
//! included, ready for the wire.

pub mod config;
pub mod errors;
pub mod filter;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use serde_json::Value;

use crate::member::Member;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use filter::Filter;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// The document store the service runs against
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// All documents matching the filter
    async fn find(&self, filter: &Filter) -> StoreResult<Vec<Value>>;

    /// The first document matching the filter, if any
    async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Value>>;

    /// Insert one member document
    async fn insert(&self, member: &Member) -> StoreResult<()>;
}
