//! Typed member records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::ValidationError;

/// A member's postal address
///
/// Only `city`, `street`, and `number` are required. Anything else the
/// client put inside `address` is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub street: String,
    /// House number, whatever JSON value the client sent
    pub number: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A member record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub member_id: String,
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
    pub date_of_birth: String,
    pub telephone: String,
    pub mobile_phone: String,
    /// Parallel to `vaccine_manufacturers`; the validator guarantees
    /// equal length and at most four entries
    pub vaccine_dates: Vec<Value>,
    pub vaccine_manufacturers: Vec<Value>,
}

impl Member {
    /// Build a typed member from a validated candidate document
    ///
    /// Unknown top-level fields are dropped. A candidate that passed
    /// the validation rules can still fail here when a declared field
    /// holds the wrong JSON type.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value)
            .map_err(|e| ValidationError::MalformedBody(format!("invalid member document: {e}")))
    }
}
