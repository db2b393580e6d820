//! # Member domain
//!
//! Typed records, the create-time validation rules, and their errors.
//! Validation runs against the raw JSON candidate; a value becomes a
//! typed [`Member`] only after every rule has passed.

pub mod errors;
pub mod record;
pub mod validator;

pub use errors::{MemberError, ValidationError};
pub use record::{Address, Member};
