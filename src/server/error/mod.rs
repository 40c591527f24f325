//! Error types for the muster server.
//!
//! Domain errors (auth, formation, line-up) each map themselves onto HTTP
//! responses; everything else falls through to a logged 500.

pub mod auth;
pub mod config;
pub mod formation;
pub mod lineup;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, formation::FormationError, lineup::LineUpError,
    },
};

/// Aggregate error for the whole server
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing environment variables)
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session identity or admin gate)
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Formation validation, visibility, or vote error
    #[error(transparent)]
    FormationError(#[from] FormationError),
    /// Line-up membership, conflict, or resolution error
    #[error(transparent)]
    LineUpError(#[from] LineUpError),
    /// Database error (query failures, connection issues, constraint violations)
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization)
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// A stored row referenced data that no longer exists
    #[error("Internal invariant broken: {0}")]
    InternalError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FormationError(err) => err.into_response(),
            Self::LineUpError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 response
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
