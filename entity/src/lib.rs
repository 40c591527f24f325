pub mod formation;
pub mod formation_slot;
pub mod formation_vote;
pub mod general;
pub mod line_up;
pub mod line_up_formation;
pub mod line_up_skill_resolution;
pub mod muster_user;
pub mod skill;

pub mod prelude {
    pub use super::formation::Entity as Formation;
    pub use super::formation_slot::Entity as FormationSlot;
    pub use super::formation_vote::Entity as FormationVote;
    pub use super::general::Entity as General;
    pub use super::line_up::Entity as LineUp;
    pub use super::line_up_formation::Entity as LineUpFormation;
    pub use super::line_up_skill_resolution::Entity as LineUpSkillResolution;
    pub use super::muster_user::Entity as MusterUser;
    pub use super::skill::Entity as Skill;
}
