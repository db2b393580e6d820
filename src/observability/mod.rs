//! Observability subsystem for memberd
//!
//! Structured JSON logging with typed events:
//! - One log line = one event
//! - Deterministic key ordering
//! - Synchronous, no buffering
//!
//! Observability is read-only. A failed log write never fails the
//! request that produced it.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
