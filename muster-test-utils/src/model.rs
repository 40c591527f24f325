//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main muster crate to ensure consistency
//! across tests.

/// Type alias for muster user database model.
pub type UserModel = entity::muster_user::Model;

/// Type alias for general database model.
pub type GeneralModel = entity::general::Model;

/// Type alias for skill database model.
pub type SkillModel = entity::skill::Model;

/// Type alias for formation database model.
pub type FormationModel = entity::formation::Model;

/// Type alias for formation slot database model.
pub type FormationSlotModel = entity::formation_slot::Model;

/// Type alias for formation vote database model.
pub type FormationVoteModel = entity::formation_vote::Model;

/// Type alias for line-up database model.
pub type LineUpModel = entity::line_up::Model;

/// Type alias for line-up formation membership database model.
pub type LineUpFormationModel = entity::line_up_formation::Model;

/// Type alias for line-up skill resolution database model.
pub type LineUpSkillResolutionModel = entity::line_up_skill_resolution::Model;
