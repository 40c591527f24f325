use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        formation::{
            CreateFormationDto, FormationDto, FormationListDto, FormationListQuery,
            UpdateFormationDto, VoteDto, VoteResultDto,
        },
    },
    server::{
        controller::util::get_user::{get_optional_user, get_user_from_session},
        error::Error,
        model::app::AppState,
        service::formation::{vote::VoteService, FormationService},
    },
};

pub static FORMATION_TAG: &str = "formation";

/// List formations visible to the caller
#[utoipa::path(
    get,
    path = "/api/formations",
    tag = FORMATION_TAG,
    params(FormationListQuery),
    responses(
        (status = 200, description = "Success when listing formations", body = FormationListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_formations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FormationListQuery>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_optional_user(&state, &session).await?;

    let listed = FormationService::new(&state.db)
        .list(query, viewer.as_ref())
        .await?;

    Ok(Json(listed))
}

/// Get a formation with its slots expanded
#[utoipa::path(
    get,
    path = "/api/formations/{id}",
    tag = FORMATION_TAG,
    params(("id" = i32, Path, description = "Formation ID")),
    responses(
        (status = 200, description = "Success when retrieving the formation", body = FormationDto),
        (status = 404, description = "Formation not found or not visible to the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_formation(
    State(state): State<AppState>,
    session: Session,
    Path(formation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_optional_user(&state, &session).await?;

    let formation = FormationService::new(&state.db)
        .get(formation_id, viewer.as_ref())
        .await?;

    Ok(Json(formation))
}

/// Create a formation owned by the caller
#[utoipa::path(
    post,
    path = "/api/formations",
    tag = FORMATION_TAG,
    request_body = CreateFormationDto,
    responses(
        (status = 201, description = "Formation created", body = FormationDto),
        (status = 400, description = "Slot validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "A referenced general was not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_formation(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateFormationDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let created = FormationService::new(&state.db).create(user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Edit a formation the caller owns
#[utoipa::path(
    put,
    path = "/api/formations/{id}",
    tag = FORMATION_TAG,
    params(("id" = i32, Path, description = "Formation ID")),
    request_body = UpdateFormationDto,
    responses(
        (status = 200, description = "Formation updated", body = FormationDto),
        (status = 400, description = "Slot validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Curated formation slots are read-only", body = ErrorDto),
        (status = 404, description = "Formation not found or not the caller's", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_formation(
    State(state): State<AppState>,
    session: Session,
    Path(formation_id): Path<i32>,
    Json(dto): Json<UpdateFormationDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let updated = FormationService::new(&state.db)
        .update(formation_id, user.id, dto)
        .await?;

    Ok(Json(updated))
}

/// Delete a formation the caller owns
#[utoipa::path(
    delete,
    path = "/api/formations/{id}",
    tag = FORMATION_TAG,
    params(("id" = i32, Path, description = "Formation ID")),
    responses(
        (status = 204, description = "Formation deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Formation not found or not the caller's", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_formation(
    State(state): State<AppState>,
    session: Session,
    Path(formation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    FormationService::new(&state.db)
        .delete(formation_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Copy a public or own formation into the caller's collection
#[utoipa::path(
    post,
    path = "/api/formations/{id}/copy",
    tag = FORMATION_TAG,
    params(("id" = i32, Path, description = "Formation ID to copy")),
    responses(
        (status = 201, description = "Copy created as a private formation", body = FormationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Formation not found or not visible to the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn copy_formation(
    State(state): State<AppState>,
    session: Session,
    Path(formation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let copied = FormationService::new(&state.db)
        .copy(formation_id, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(copied)))
}

/// Cast or change a vote on a curated formation
#[utoipa::path(
    post,
    path = "/api/formations/{id}/vote",
    tag = FORMATION_TAG,
    params(("id" = i32, Path, description = "Formation ID")),
    request_body = VoteDto,
    responses(
        (status = 200, description = "Vote recorded, aggregates recomputed", body = VoteResultDto),
        (status = 400, description = "Invalid vote value or formation not curated", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Formation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote_formation(
    State(state): State<AppState>,
    session: Session,
    Path(formation_id): Path<i32>,
    Json(dto): Json<VoteDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let result = VoteService::new(&state.db)
        .vote(formation_id, user.id, dto.value)
        .await?;

    Ok(Json(result))
}
