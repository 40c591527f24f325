use serde::{Deserialize, Serialize};

/// The logged-in user as returned by the current-user endpoint
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub display_name: String,
    pub is_admin: bool,
}
