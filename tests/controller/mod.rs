//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response status mapping, session identity
//! resolution, and error handling for all API endpoints. Response payload
//! semantics are covered by the service layer tests; these tests focus on the
//! HTTP surface.

mod admin;
mod formation;
mod lineup;
mod user;

use muster_test_utils::prelude::*;
