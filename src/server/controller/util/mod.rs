//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers for
//! resolving the calling user from their session, including the optional
//! and admin-gated variants.

pub mod get_user;
