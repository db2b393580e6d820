//! memberd - a minimal member-records HTTP service backed by a
//! document store
//!
//! Two endpoints: `GET /api/members` lists stored members, optionally
//! narrowed by `member_id`; `POST /api/members` validates and inserts
//! one member. Everything else is a 404.

pub mod api;
pub mod cli;
pub mod member;
pub mod observability;
pub mod store;
