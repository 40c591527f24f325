use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by formation validation, visibility checks, and voting
#[derive(Error, Debug)]
pub enum FormationError {
    /// The formation does not exist, or the caller may not see it
    #[error("Formation not found")]
    NotFound,
    /// An admin write named an owner that does not exist
    #[error("User ID {0} not found")]
    OwnerNotFound(i32),
    /// Slot edits on a curated formation are reserved for admins
    #[error("Curated formation slots are read-only")]
    CuratedReadOnly,
    /// A formation holds between one and three slots
    #[error("A formation needs between 1 and 3 slots, got {0}")]
    InvalidSlotCount(usize),
    /// Positions must be unique values between 1 and 3
    #[error("Slot positions must be unique values between 1 and 3")]
    InvalidPositions,
    /// The same general was assigned to more than one slot
    #[error("A general can only be assigned once per formation")]
    DuplicateGeneral,
    /// A slot named a general that does not exist
    #[error("General ID {0} not found")]
    GeneralNotFound(i32),
    /// The summed deployment cost went over the budget
    #[error("Formation cost {total} is over the 21 point budget")]
    CostExceeded { total: i32 },
    /// A vote carried a value other than +1 or -1
    #[error("Vote value must be +1 or -1, got {0}")]
    InvalidVoteValue(i32),
    /// Votes only apply to curated formations
    #[error("Only curated formations accept votes")]
    NotCurated,
}

impl IntoResponse for FormationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match &self {
            Self::NotFound | Self::OwnerNotFound(_) | Self::GeneralNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::CuratedReadOnly => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
