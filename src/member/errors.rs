//! Member domain errors
//!
//! The `#[error]` texts on `ValidationError` are wire contract:
//! clients match on them byte for byte.

use thiserror::Error;

use crate::store::StoreError;

/// A create-time validation rejection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required top-level field is absent
    #[error("Missing required fields")]
    MissingFields,

    /// `address` is not a mapping carrying city, street, and number
    #[error("Bad request - address field must include city, street, and number")]
    IncompleteAddress,

    /// `member_id` is not a nine-character string
    #[error("Bad id number")]
    InvalidMemberId,

    /// A stored member already carries this `member_id`
    #[error("Member with the same ID already exists")]
    DuplicateMemberId,

    /// The vaccination fields are not both arrays
    #[error("The type of the fields :vaccine_dates,vaccine_manufacturers should be list")]
    VaccineFieldsNotLists,

    /// The parallel vaccination arrays differ in length
    #[error("The number of vaccination dates is not the same as the number of their manufacturers - incompatibility.")]
    VaccineLengthMismatch,

    /// More than four vaccination entries
    #[error("The number of vaccination dates is more than 4")]
    TooManyVaccinations,

    /// The request body never became a candidate document
    #[error("{0}")]
    MalformedBody(String),
}

impl ValidationError {
    /// The `error` field every validation envelope carries
    pub fn description(&self) -> &'static str {
        "Bad Request error"
    }
}

/// Validation or store failure during a member operation
#[derive(Debug, Error)]
pub enum MemberError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
