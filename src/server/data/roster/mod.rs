//! Roster lookups: generals with their deployment costs, and skills.

pub mod general;
pub mod skill;
