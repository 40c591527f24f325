use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        lineup::{
            CreateLineUpDto, GeneralConflictErrorDto, LineUpDetailDto, LineUpListDto,
            LineUpSummaryDto, ResolveSkillDto, UpdateLineUpDto,
        },
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::lineup::{resolution::ResolutionService, LineUpService},
    },
};

pub static LINEUP_TAG: &str = "lineup";

/// List the caller's line-ups with conflict counts
#[utoipa::path(
    get,
    path = "/api/lineups",
    tag = LINEUP_TAG,
    responses(
        (status = 200, description = "Success when listing line-ups", body = LineUpListDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_line_ups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let listed = LineUpService::new(&state.db).list(user.id).await?;

    Ok(Json(listed))
}

/// Create a line-up from existing formations
#[utoipa::path(
    post,
    path = "/api/lineups",
    tag = LINEUP_TAG,
    request_body = CreateLineUpDto,
    responses(
        (status = 201, description = "Line-up created, skill conflicts reported", body = LineUpSummaryDto),
        (status = 400, description = "Empty name or formation list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "A member formation was not found", body = ErrorDto),
        (status = 409, description = "A general marches in more than one formation", body = GeneralConflictErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_line_up(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateLineUpDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let created = LineUpService::new(&state.db).create(user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a line-up with members expanded and conflicts recomputed
#[utoipa::path(
    get,
    path = "/api/lineups/{id}",
    tag = LINEUP_TAG,
    params(("id" = i32, Path, description = "Line-up ID")),
    responses(
        (status = 200, description = "Success when retrieving the line-up", body = LineUpDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Line-up not found or not the caller's", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_line_up(
    State(state): State<AppState>,
    session: Session,
    Path(line_up_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let detail = LineUpService::new(&state.db).get(line_up_id, user.id).await?;

    Ok(Json(detail))
}

/// Rename a line-up or replace its membership
#[utoipa::path(
    put,
    path = "/api/lineups/{id}",
    tag = LINEUP_TAG,
    params(("id" = i32, Path, description = "Line-up ID")),
    request_body = UpdateLineUpDto,
    responses(
        (status = 200, description = "Line-up updated, skill conflicts reported", body = LineUpSummaryDto),
        (status = 400, description = "Empty name or formation list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Line-up or a member formation was not found", body = ErrorDto),
        (status = 409, description = "A general marches in more than one formation", body = GeneralConflictErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_line_up(
    State(state): State<AppState>,
    session: Session,
    Path(line_up_id): Path<i32>,
    Json(dto): Json<UpdateLineUpDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let updated = LineUpService::new(&state.db)
        .update(line_up_id, user.id, dto)
        .await?;

    Ok(Json(updated))
}

/// Delete a line-up, leaving its member formations in place
#[utoipa::path(
    delete,
    path = "/api/lineups/{id}",
    tag = LINEUP_TAG,
    params(("id" = i32, Path, description = "Line-up ID")),
    responses(
        (status = 204, description = "Line-up deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Line-up not found or not the caller's", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_line_up(
    State(state): State<AppState>,
    session: Session,
    Path(line_up_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    LineUpService::new(&state.db).delete(line_up_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark a skill conflict as resolved with an optional note
#[utoipa::path(
    post,
    path = "/api/lineups/{id}/resolve",
    tag = LINEUP_TAG,
    params(("id" = i32, Path, description = "Line-up ID")),
    request_body = ResolveSkillDto,
    responses(
        (status = 204, description = "Resolution recorded"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Line-up or skill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_skill_conflict(
    State(state): State<AppState>,
    session: Session,
    Path(line_up_id): Path<i32>,
    Json(dto): Json<ResolveSkillDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    ResolutionService::new(&state.db)
        .resolve(line_up_id, user.id, dto.skill_id, dto.note)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Take back a recorded skill conflict resolution
#[utoipa::path(
    delete,
    path = "/api/lineups/{id}/resolve/{skill_id}",
    tag = LINEUP_TAG,
    params(
        ("id" = i32, Path, description = "Line-up ID"),
        ("skill_id" = i32, Path, description = "Skill ID the resolution was recorded for")
    ),
    responses(
        (status = 204, description = "Resolution removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Line-up or resolution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unresolve_skill_conflict(
    State(state): State<AppState>,
    session: Session,
    Path((line_up_id, skill_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    ResolutionService::new(&state.db)
        .unresolve(line_up_id, user.id, skill_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
