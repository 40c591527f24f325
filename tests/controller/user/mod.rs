//! Tests for user controller endpoints.
//!
//! This module contains integration tests for user-related HTTP endpoints,
//! covering account retrieval and session identity handling.


use super::*;
