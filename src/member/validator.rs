//! Create-time validation rules
//!
//! The rules run in a fixed order and the first failure wins, so a
//! candidate violating several rules always reports the same message.
//! Validation inspects the raw JSON candidate, never a typed value;
//! typed construction happens only after every rule has passed.

use serde_json::Value;

use crate::store::{Filter, MemberStore};

use super::errors::{MemberError, ValidationError};

/// Top-level fields every candidate must carry
pub const REQUIRED_FIELDS: [&str; 9] = [
    "first_name",
    "last_name",
    "address",
    "date_of_birth",
    "telephone",
    "mobile_phone",
    "vaccine_dates",
    "vaccine_manufacturers",
    "member_id",
];

/// Fields the address mapping must carry
pub const REQUIRED_ADDRESS_FIELDS: [&str; 3] = ["city", "street", "number"];

/// Member ids are exactly this many characters
pub const MEMBER_ID_LENGTH: usize = 9;

/// Upper bound on vaccination entries
pub const MAX_VACCINATIONS: usize = 4;

/// Run every rule against a candidate document
///
/// The store is consulted exactly once, read-only, for the uniqueness
/// rule. That check and any later insert are not atomic: two
/// concurrent creates carrying the same id can both pass here, and the
/// store does not enforce uniqueness either.
pub async fn validate(candidate: &Value, store: &dyn MemberStore) -> Result<(), MemberError> {
    // All required fields present. A non-object candidate has none.
    let fields = match candidate.as_object() {
        Some(fields) if REQUIRED_FIELDS.iter().all(|f| fields.contains_key(*f)) => fields,
        _ => return Err(ValidationError::MissingFields.into()),
    };

    // Address carries city, street, and number
    let address_complete = fields
        .get("address")
        .and_then(Value::as_object)
        .map_or(false, |address| {
            REQUIRED_ADDRESS_FIELDS.iter().all(|f| address.contains_key(*f))
        });
    if !address_complete {
        return Err(ValidationError::IncompleteAddress.into());
    }

    // member_id is a nine-character string
    let member_id = match fields.get("member_id").and_then(Value::as_str) {
        Some(id) if id.chars().count() == MEMBER_ID_LENGTH => id,
        _ => return Err(ValidationError::InvalidMemberId.into()),
    };

    // No stored member carries this id
    let existing = store
        .find_one(&Filter::new().eq("member_id", Value::String(member_id.to_string())))
        .await?;
    if existing.is_some() {
        return Err(ValidationError::DuplicateMemberId.into());
    }

    // Both vaccination fields are arrays
    let dates = fields.get("vaccine_dates").and_then(Value::as_array);
    let manufacturers = fields.get("vaccine_manufacturers").and_then(Value::as_array);
    let (dates, manufacturers) = match (dates, manufacturers) {
        (Some(dates), Some(manufacturers)) => (dates, manufacturers),
        _ => return Err(ValidationError::VaccineFieldsNotLists.into()),
    };

    // The parallel arrays line up
    if dates.len() != manufacturers.len() {
        return Err(ValidationError::VaccineLengthMismatch.into());
    }

    // At most four vaccination entries
    if dates.len() > MAX_VACCINATIONS {
        return Err(ValidationError::TooManyVaccinations.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Member;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn candidate() -> Value {
        json!({
            "member_id": "123456789",
            "first_name": "Dana",
            "last_name": "Levy",
            "address": {"city": "Haifa", "street": "Herzl", "number": 12},
            "date_of_birth": "1990-01-01",
            "telephone": "04-8123456",
            "mobile_phone": "052-1234567",
            "vaccine_dates": ["2021-01-01", "2021-02-01"],
            "vaccine_manufacturers": ["Pfizer", "Moderna"],
        })
    }

    async fn rejection(candidate: &Value, store: &MemoryStore) -> ValidationError {
        match validate(candidate, store).await {
            Err(MemberError::Validation(err)) => err,
            other => panic!("expected a validation rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_valid_candidate_passes() {
        let store = MemoryStore::new();
        validate(&candidate(), &store).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value.as_object_mut().unwrap().remove("telephone");

        let err = rejection(&value, &store).await;
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[tokio::test]
    async fn test_non_object_candidate_is_rejected() {
        let store = MemoryStore::new();

        let err = rejection(&json!(["not", "an", "object"]), &store).await;
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[tokio::test]
    async fn test_incomplete_address_is_rejected() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["address"] = json!({"city": "Haifa", "street": "Herzl"});

        let err = rejection(&value, &store).await;
        assert_eq!(err, ValidationError::IncompleteAddress);
    }

    #[tokio::test]
    async fn test_non_mapping_address_is_rejected() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["address"] = json!("Herzl 12, Haifa");

        let err = rejection(&value, &store).await;
        assert_eq!(err, ValidationError::IncompleteAddress);
    }

    #[tokio::test]
    async fn test_short_member_id_is_rejected() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["member_id"] = json!("12345678");

        let err = rejection(&value, &store).await;
        assert_eq!(err, ValidationError::InvalidMemberId);
    }

    #[tokio::test]
    async fn test_numeric_member_id_is_rejected() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["member_id"] = json!(123456789);

        let err = rejection(&value, &store).await;
        assert_eq!(err, ValidationError::InvalidMemberId);
    }

    #[tokio::test]
    async fn test_member_id_length_counts_characters_not_bytes() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["member_id"] = json!("אבגדהוזחט");

        validate(&value, &store).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_member_id_is_rejected() {
        let store = MemoryStore::new();
        let stored = Member::from_value(candidate()).unwrap();
        store.insert(&stored).await.unwrap();

        let err = rejection(&candidate(), &store).await;
        assert_eq!(err, ValidationError::DuplicateMemberId);
    }

    #[tokio::test]
    async fn test_non_list_vaccine_fields_are_rejected() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["vaccine_dates"] = json!("2021-01-01");

        let err = rejection(&value, &store).await;
        assert_eq!(err, ValidationError::VaccineFieldsNotLists);
    }

    #[tokio::test]
    async fn test_mismatched_vaccine_lengths_are_rejected() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["vaccine_manufacturers"] = json!(["Pfizer"]);

        let err = rejection(&value, &store).await;
        assert_eq!(err, ValidationError::VaccineLengthMismatch);
    }

    #[tokio::test]
    async fn test_more_than_four_vaccinations_are_rejected() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["vaccine_dates"] = json!(["d1", "d2", "d3", "d4", "d5"]);
        value["vaccine_manufacturers"] = json!(["m1", "m2", "m3", "m4", "m5"]);

        let err = rejection(&value, &store).await;
        assert_eq!(err, ValidationError::TooManyVaccinations);
    }

    #[tokio::test]
    async fn test_exactly_four_vaccinations_pass() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["vaccine_dates"] = json!(["d1", "d2", "d3", "d4"]);
        value["vaccine_manufacturers"] = json!(["m1", "m2", "m3", "m4"]);

        validate(&value, &store).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_vaccine_lists_pass() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["vaccine_dates"] = json!([]);
        value["vaccine_manufacturers"] = json!([]);

        validate(&value, &store).await.unwrap();
    }

    #[tokio::test]
    async fn test_earlier_rule_wins_when_several_fail() {
        let store = MemoryStore::new();
        let mut value = candidate();
        value["member_id"] = json!("12");
        value["vaccine_dates"] = json!(["d1", "d2", "d3", "d4", "d5"]);
        value["vaccine_manufacturers"] = json!(["m1", "m2", "m3", "m4", "m5"]);

        let err = rejection(&value, &store).await;
        assert_eq!(err, ValidationError::InvalidMemberId);
    }

    #[tokio::test]
    async fn test_empty_candidate_is_rejected() {
        let store = MemoryStore::new();

        let err = rejection(&json!({}), &store).await;
        assert_eq!(err, ValidationError::MissingFields);
    }
}
