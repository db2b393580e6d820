//! # API Errors
//!
//! The error translator. Three body shapes leave this module:
//!
//! - validation rejections, 400: `{"error": ..., "message": ...}`
//! - unknown routes, 404: the camelCase fault envelope
//! - store failures, 500: the camelCase fault envelope
//!
//! The shapes are deliberately not unified; clients match on each one
//! as it stands. Store detail never reaches a body, only the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::member::{MemberError, ValidationError};
use crate::observability::{Event, Logger};
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors leaving the HTTP surface
#[derive(Debug, Error)]
pub enum ApiError {
    /// A create-time rule rejected the candidate
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No route matched the request path
    #[error("Resource not found!")]
    NotFound,
}

impl From<MemberError> for ApiError {
    fn from(err: MemberError) -> Self {
        match err {
            MemberError::Validation(e) => ApiError::Validation(e),
            MemberError::Store(e) => ApiError::Store(e),
        }
    }
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of a validation rejection
#[derive(Debug, Serialize)]
pub struct RejectionBody {
    pub error: String,
    pub message: String,
}

impl RejectionBody {
    fn new(err: &ValidationError) -> Self {
        Self {
            error: err.description().to_string(),
            message: err.to_string(),
        }
    }
}

/// Body of a routing or server fault
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultBody {
    pub error_code: u16,
    pub error_description: String,
    pub error_detailed_description: String,
    pub error_name: String,
}

impl FaultBody {
    /// The body every unknown route gets
    pub fn not_found() -> Self {
        Self {
            error_code: StatusCode::NOT_FOUND.as_u16(),
            error_description: "Resource not found!".to_string(),
            error_detailed_description: "The requested path has no route on this server."
                .to_string(),
            error_name: "Not Found".to_string(),
        }
    }

    /// The body every internal fault gets, regardless of cause
    pub fn internal() -> Self {
        Self {
            error_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            error_description: "Internal Server Error".to_string(),
            error_detailed_description:
                "The server encountered an internal error and was unable to complete the request."
                    .to_string(),
            error_name: "Internal Server Error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(err) => {
                let message = err.to_string();
                Logger::event(Event::MemberRejected, &[("message", message.as_str())]);
                (status, Json(RejectionBody::new(&err))).into_response()
            }
            ApiError::Store(err) => {
                let detail = err.to_string();
                Logger::event(Event::StoreFault, &[("detail", detail.as_str())]);
                (status, Json(FaultBody::internal())).into_response()
            }
            ApiError::NotFound => {
                Logger::event(Event::RouteNotFound, &[]);
                (status, Json(FaultBody::not_found())).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationError::MissingFields).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(StoreError::Internal("down".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_rejection_body_shape() {
        let body = RejectionBody::new(&ValidationError::InvalidMemberId);

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"error": "Bad Request error", "message": "Bad id number"})
        );
    }

    #[test]
    fn test_fault_body_uses_camel_case_keys() {
        let body = serde_json::to_value(FaultBody::not_found()).unwrap();

        assert_eq!(body["errorCode"], 404);
        assert_eq!(body["errorDescription"], "Resource not found!");
        assert_eq!(body["errorName"], "Not Found");
        assert!(body["errorDetailedDescription"].is_string());
    }

    #[test]
    fn test_internal_fault_body_is_fixed() {
        let body = serde_json::to_value(FaultBody::internal()).unwrap();

        assert_eq!(body["errorCode"], 500);
        assert_eq!(body["errorDescription"], "Internal Server Error");
        assert_eq!(body["errorName"], "Internal Server Error");
    }

    #[test]
    fn test_member_error_splits_into_api_variants() {
        let validation: ApiError = MemberError::from(ValidationError::MissingFields).into();
        assert!(matches!(validation, ApiError::Validation(_)));

        let store: ApiError = MemberError::from(StoreError::MissingConnString).into();
        assert!(matches!(store, ApiError::Store(_)));
    }
}
