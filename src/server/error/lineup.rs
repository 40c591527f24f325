use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{
    api::ErrorDto,
    lineup::{GeneralConflictDto, GeneralConflictErrorDto},
};

/// Errors raised by line-up membership writes and resolution tracking
#[derive(Error, Debug)]
pub enum LineUpError {
    /// The line-up does not exist, or belongs to someone else
    #[error("Line-up not found")]
    NotFound,
    /// The line-up name was empty or whitespace
    #[error("A line-up needs a name")]
    EmptyName,
    /// The membership list was empty
    #[error("A line-up needs at least one formation")]
    NoFormations,
    /// One or more requested formations do not exist
    #[error("One or more formations not found")]
    FormationsNotFound,
    /// The requested membership shares generals across formations
    #[error("{} general(s) are used by more than one formation", .0.len())]
    GeneralConflicts(Vec<GeneralConflictDto>),
    /// A resolution named a skill that does not exist
    #[error("Skill ID {0} not found")]
    SkillNotFound(i32),
    /// No resolution row exists for the named skill
    #[error("No resolution recorded for this skill")]
    ResolutionNotFound,
}

impl IntoResponse for LineUpError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::GeneralConflicts(general_conflicts) => (
                StatusCode::CONFLICT,
                Json(GeneralConflictErrorDto {
                    error: "A general can only march in one formation per line-up".to_string(),
                    general_conflicts,
                }),
            )
                .into_response(),
            other => {
                let status = match &other {
                    Self::NotFound
                    | Self::FormationsNotFound
                    | Self::SkillNotFound(_)
                    | Self::ResolutionNotFound => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_REQUEST,
                };

                (
                    status,
                    Json(ErrorDto {
                        error: other.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
