//! HTTP controller endpoints for the Muster web API.
//!
//! This module contains Axum handlers for the formation catalog, line-up
//! planning, voting, and the session identity surface. Controllers handle
//! HTTP requests, resolve the caller from their session, delegate to
//! services, and map the outcome to HTTP responses. They integrate with
//! tower-sessions for session management and use utoipa for OpenAPI
//! documentation.

pub mod admin;
pub mod formation;
pub mod lineup;
pub mod user;
pub mod util;
