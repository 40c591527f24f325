//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. The formation side
//! covers slot validation, CRUD with visibility rules, and vote ranking;
//! the line-up side covers membership orchestration, conflict detection,
//! and resolution tracking.

pub mod formation;
pub mod lineup;
