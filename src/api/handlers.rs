//! # Member Endpoint Handlers

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::member::{validator, Member, ValidationError};
use crate::observability::{Event, Logger};
use crate::store::Filter;

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;
use super::server::ApiState;

/// List members, optionally narrowed to one member id
///
/// The `member_id` query value is used as-is; an id no stored member
/// carries simply yields an empty list. Other query parameters are
/// ignored.
pub async fn list_members(
    State(state): State<ApiState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Value>>> {
    let mut filter = Filter::new();
    if let Some(member_id) = query.get("member_id") {
        filter = filter.eq("member_id", Value::String(member_id.clone()));
    }

    let filtered = if filter.is_empty() { "false" } else { "true" };
    let members = state.store.find(&filter).await?;

    let count = members.len().to_string();
    Logger::event(
        Event::MembersListed,
        &[("count", count.as_str()), ("filtered", filtered)],
    );
    Ok(Json(members))
}

/// Create a member
///
/// The body is read raw and parsed here, not by an extractor, so a
/// malformed body produces the same rejection envelope as any other
/// validation failure.
pub async fn create_member(
    State(state): State<ApiState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let candidate: Value = serde_json::from_slice(&body)
        .map_err(|e| ValidationError::MalformedBody(format!("malformed JSON body: {e}")))?;

    validator::validate(&candidate, state.store.as_ref()).await?;

    let member = Member::from_value(candidate)?;
    state.store.insert(&member).await?;

    Logger::event(
        Event::MemberCreated,
        &[("member_id", member.member_id.as_str())],
    );
    Ok((StatusCode::CREATED, Json(MessageResponse::member_added())))
}

/// Fallback for requests no route matches
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound
}
