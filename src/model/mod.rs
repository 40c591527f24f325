//! Wire data transfer objects shared by the API surface.

pub mod api;
pub mod formation;
pub mod lineup;
pub mod roster;
pub mod user;
