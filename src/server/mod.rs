//! Server application core modules.
//!
//! Everything behind the HTTP surface lives here: configuration, routing,
//! session identity, the repository layer over the database, and the
//! services implementing formation validation, vote ranking, and line-up
//! conflict detection.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
