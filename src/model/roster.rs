use serde::{Deserialize, Serialize};

/// A general as embedded in formation slot responses
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GeneralDto {
    pub id: i32,
    pub name: String,
    /// Deployment point cost
    pub cost: i32,
}

/// A skill as embedded in formation slot responses
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SkillDto {
    pub id: i32,
    pub name: String,
}
