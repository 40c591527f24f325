//! Test fixture modules for database record creation.
//!
//! Each submodule provides insert helpers for one slice of the schema:
//!
//! - `roster` - generals and skills shared by all content
//! - `user` - muster user accounts
//! - `formation` - formations, their slots, and votes
//! - `lineup` - line-ups, their formation memberships, and skill resolutions

pub mod formation;
pub mod lineup;
pub mod roster;
pub mod user;
