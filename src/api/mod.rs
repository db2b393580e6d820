//! # HTTP API
//!
//! The member records surface: `GET /api/members` and
//! `POST /api/members`, plus the error translation every failure
//! flows through.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod response;
pub mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::MessageResponse;
pub use server::{ApiServer, ApiState};
