use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while resolving the caller's session identity
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session
    #[error("User ID is not present in session")]
    UserNotInSession,
    /// The session named a user that no longer exists
    #[error("User ID {0} has an active session but was not found in database")]
    UserNotInDatabase(i32),
    /// The caller is logged in but not an administrator
    #[error("User ID {0} is not an administrator")]
    NotAdmin(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::NotAdmin(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Administrator access required".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
