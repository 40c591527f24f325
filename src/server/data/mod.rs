//! Data access layer repositories.
//!
//! Repositories wrap the generated entities with the queries the services
//! need, generic over [`sea_orm::ConnectionTrait`] so they run against the
//! pooled connection or an open transaction alike.

pub mod formation;
pub mod lineup;
pub mod roster;
pub mod user;
