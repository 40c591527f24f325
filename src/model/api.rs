use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Page envelope returned by list endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaginationDto {
    /// 1-based page number
    pub page: u64,
    /// Rows per page
    pub limit: u64,
    /// Total rows matching the filters
    pub total: u64,
    /// Total pages at this limit
    pub total_pages: u64,
}
