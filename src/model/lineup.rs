use chrono::NaiveDateTime;
use entity::formation::ArmyType;
use serde::{Deserialize, Serialize};

use crate::model::formation::{FormationOwnerDto, FormationSlotDto};

/// Request body for creating a line-up
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateLineUpDto {
    pub name: String,
    /// Member formations in march order
    pub formation_ids: Vec<i32>,
}

/// Request body for editing a line-up. Absent fields are left as-is.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateLineUpDto {
    pub name: Option<String>,
    /// Replaces the whole membership set when present
    pub formation_ids: Option<Vec<i32>>,
}

/// A general marching in more than one member formation. Hard conflict:
/// rejects the line-up write that would produce it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GeneralConflictDto {
    pub general_id: i32,
    pub general_name: String,
    /// Formations sharing the general, in first-encounter order
    pub formation_ids: Vec<i32>,
}

/// A skill equipped in more than one member formation. Soft conflict:
/// reported and resolvable, never blocking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SkillConflictDto {
    pub skill_id: i32,
    pub skill_name: String,
    /// Formations sharing the skill, in first-encounter order
    pub formation_ids: Vec<i32>,
    /// Whether the owner has recorded a resolution for this skill
    pub resolved: bool,
}

/// Response body for line-up writes rejected over general conflicts
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GeneralConflictErrorDto {
    pub error: String,
    pub general_conflicts: Vec<GeneralConflictDto>,
}

/// Request body for resolving a skill conflict
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResolveSkillDto {
    pub skill_id: i32,
    pub note: Option<String>,
}

/// A recorded skill conflict resolution
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SkillResolutionDto {
    pub skill_id: i32,
    pub skill_name: String,
    pub resolved: bool,
    pub note: Option<String>,
}

/// Response body for line-up create and update
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LineUpSummaryDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub formation_count: usize,
    /// Soft conflicts over the membership as it now stands
    pub skill_conflicts: Vec<SkillConflictDto>,
}

/// One row of the line-up list view
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LineUpOverviewDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub formation_count: usize,
    pub general_conflict_count: usize,
    pub skill_conflict_count: usize,
    pub unresolved_skill_conflict_count: usize,
}

/// Response body for the line-up list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LineUpListDto {
    pub lineups: Vec<LineUpOverviewDto>,
}

/// A member formation expanded for the line-up detail view
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LineUpFormationDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub army_type: ArmyType,
    /// March order within the line-up
    pub position: i32,
    pub user: Option<FormationOwnerDto>,
    pub slots: Vec<FormationSlotDto>,
    pub total_cost: i32,
}

/// Full line-up detail with freshly recomputed conflict reports
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LineUpDetailDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub formations: Vec<LineUpFormationDto>,
    pub general_conflicts: Vec<GeneralConflictDto>,
    pub skill_conflicts: Vec<SkillConflictDto>,
    /// Raw resolution rows, including ones for skills no longer in conflict
    pub skill_resolutions: Vec<SkillResolutionDto>,
}
