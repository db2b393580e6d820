//! # API Response Types
//!
//! Success bodies for the member endpoints. Error bodies live in
//! [`super::errors`].

use serde::Serialize;

/// Simple message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Body of a successful member creation
    pub fn member_added() -> Self {
        Self::new("Member added successfully")
    }
}
