//! Server-side models: shared application state and session data.

pub mod app;
pub mod session;
