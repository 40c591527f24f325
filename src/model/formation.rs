use chrono::NaiveDateTime;
use entity::formation::ArmyType;
use serde::{Deserialize, Serialize};

use crate::model::{
    api::PaginationDto,
    roster::{GeneralDto, SkillDto},
};

/// One proposed slot: a general at a display position with up to two skills
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormationSlotInputDto {
    pub general_id: i32,
    /// 1-based position, unique within the formation
    pub position: i32,
    pub skill1_id: Option<i32>,
    pub skill2_id: Option<i32>,
}

/// Request body for creating a formation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFormationDto {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub army_type: ArmyType,
    /// Defaults to private when omitted
    pub is_public: Option<bool>,
    pub slots: Vec<FormationSlotInputDto>,
}

/// Request body for editing an owned formation. Absent fields are left as-is.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateFormationDto {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub army_type: Option<ArmyType>,
    pub is_public: Option<bool>,
    /// Replaces the whole slot set when present
    pub slots: Option<Vec<FormationSlotInputDto>>,
}

/// Request body for the admin create endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminCreateFormationDto {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub army_type: ArmyType,
    /// Defaults to public when omitted
    pub is_public: Option<bool>,
    /// Defaults to curated when omitted
    pub is_curated: Option<bool>,
    /// Owner to assign; omit for an unowned curated formation
    pub user_id: Option<i32>,
    pub slots: Vec<FormationSlotInputDto>,
}

/// Request body for the admin update endpoint. Absent fields are left as-is;
/// `user_id` set to `null` detaches the owner.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminUpdateFormationDto {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub army_type: Option<ArmyType>,
    pub is_public: Option<bool>,
    pub is_curated: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<Option<i32>>,
    pub slots: Option<Vec<FormationSlotInputDto>>,
}

/// Keeps an explicit `null` apart from an absent field: present values
/// (including `null`) land in `Some`, while `#[serde(default)]` turns a
/// missing field into `None`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// The owner summary embedded in formation responses
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormationOwnerDto {
    pub id: i32,
    pub display_name: String,
}

/// A stored slot expanded with its roster rows
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormationSlotDto {
    pub id: i32,
    pub position: i32,
    pub general: GeneralDto,
    pub skill1: Option<SkillDto>,
    pub skill2: Option<SkillDto>,
}

/// A formation with its slots expanded
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormationDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub army_type: ArmyType,
    pub is_public: bool,
    pub is_curated: bool,
    pub rank_score: i32,
    pub vote_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user: Option<FormationOwnerDto>,
    /// Slots ordered by position
    pub slots: Vec<FormationSlotDto>,
    /// The caller's own vote, when logged in and one exists
    pub user_vote: Option<i32>,
    /// Summed deployment cost of the slots
    pub total_cost: i32,
}

/// Response body for formation list endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormationListDto {
    pub formations: Vec<FormationDto>,
    pub pagination: PaginationDto,
}

/// Query parameters accepted by the formation list endpoints
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormationListQuery {
    /// Case-insensitive name filter
    pub search: Option<String>,
    #[param(value_type = Option<String>)]
    pub army_type: Option<ArmyType>,
    /// When true, only curated formations are returned
    pub curated: Option<bool>,
    /// Restrict to one owner's formations
    pub user_id: Option<i32>,
    /// `rank` (default), `newest` or `oldest`
    pub sort: Option<String>,
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Request body for casting a vote
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct VoteDto {
    /// +1 or -1
    pub value: i32,
}

/// Recomputed aggregates returned after a vote lands
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VoteResultDto {
    pub rank_score: i32,
    pub vote_count: i32,
    pub user_vote: i32,
}
