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
            AdminCreateFormationDto, AdminUpdateFormationDto, FormationDto, FormationListDto,
            FormationListQuery,
        },
    },
    server::{
        controller::util::get_user::get_admin_from_session, error::Error, model::app::AppState,
        service::formation::FormationService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// List all formations, including private ones
#[utoipa::path(
    get,
    path = "/api/admin/formations",
    tag = ADMIN_TAG,
    params(FormationListQuery),
    responses(
        (status = 200, description = "Success when listing formations", body = FormationListDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_list_formations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FormationListQuery>,
) -> Result<impl IntoResponse, Error> {
    get_admin_from_session(&state, &session).await?;

    let listed = FormationService::new(&state.db).admin_list(query).await?;

    Ok(Json(listed))
}

/// Create a formation on behalf of the site, curated by default
#[utoipa::path(
    post,
    path = "/api/admin/formations",
    tag = ADMIN_TAG,
    request_body = AdminCreateFormationDto,
    responses(
        (status = 201, description = "Formation created", body = FormationDto),
        (status = 400, description = "Slot validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "A referenced general or owner was not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_create_formation(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<AdminCreateFormationDto>,
) -> Result<impl IntoResponse, Error> {
    get_admin_from_session(&state, &session).await?;

    let created = FormationService::new(&state.db).admin_create(dto).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Edit any formation, including curation, visibility, and owner
#[utoipa::path(
    put,
    path = "/api/admin/formations/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Formation ID")),
    request_body = AdminUpdateFormationDto,
    responses(
        (status = 200, description = "Formation updated", body = FormationDto),
        (status = 400, description = "Slot validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "Formation or requested owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_update_formation(
    State(state): State<AppState>,
    session: Session,
    Path(formation_id): Path<i32>,
    Json(dto): Json<AdminUpdateFormationDto>,
) -> Result<impl IntoResponse, Error> {
    get_admin_from_session(&state, &session).await?;

    let updated = FormationService::new(&state.db)
        .admin_update(formation_id, dto)
        .await?;

    Ok(Json(updated))
}

/// Delete any formation
#[utoipa::path(
    delete,
    path = "/api/admin/formations/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Formation ID")),
    responses(
        (status = 204, description = "Formation deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "Formation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_delete_formation(
    State(state): State<AppState>,
    session: Session,
    Path(formation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = get_admin_from_session(&state, &session).await?;

    FormationService::new(&state.db)
        .delete(formation_id, &admin)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
