//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Handlers sharing a path are registered together so their methods combine
/// into one route. The OpenAPI specification collected from the handler
/// annotations is served at `/api/docs/openapi.json`.
///
/// # Registered Endpoints
/// - `GET/POST /api/formations` - Browse and create formations
/// - `GET/PUT/DELETE /api/formations/{id}` - Read and manage one formation
/// - `POST /api/formations/{id}/copy` - Copy a formation into the caller's collection
/// - `POST /api/formations/{id}/vote` - Vote on a curated formation
/// - `GET/POST /api/admin/formations` - Admin formation listing and creation
/// - `PUT/DELETE /api/admin/formations/{id}` - Admin formation management
/// - `GET/POST /api/lineups` - Browse and create line-ups
/// - `GET/PUT/DELETE /api/lineups/{id}` - Read and manage one line-up
/// - `POST /api/lineups/{id}/resolve` - Resolve a skill conflict
/// - `DELETE /api/lineups/{id}/resolve/{skill_id}` - Take back a resolution
/// - `GET /api/users/me` - Current user's account
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes and the Swagger UI,
/// ready to be served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Muster", description = "Muster API"), tags(
        (name = controller::formation::FORMATION_TAG, description = "Formation catalog API routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin formation management API routes"),
        (name = controller::lineup::LINEUP_TAG, description = "Line-up planning API routes"),
        (name = controller::user::USER_TAG, description = "User account API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::formation::list_formations,
            controller::formation::create_formation
        ))
        .routes(routes!(
            controller::formation::get_formation,
            controller::formation::update_formation,
            controller::formation::delete_formation
        ))
        .routes(routes!(controller::formation::copy_formation))
        .routes(routes!(controller::formation::vote_formation))
        .routes(routes!(
            controller::admin::admin_list_formations,
            controller::admin::admin_create_formation
        ))
        .routes(routes!(
            controller::admin::admin_update_formation,
            controller::admin::admin_delete_formation
        ))
        .routes(routes!(
            controller::lineup::list_line_ups,
            controller::lineup::create_line_up
        ))
        .routes(routes!(
            controller::lineup::get_line_up,
            controller::lineup::update_line_up,
            controller::lineup::delete_line_up
        ))
        .routes(routes!(controller::lineup::resolve_skill_conflict))
        .routes(routes!(controller::lineup::unresolve_skill_conflict))
        .routes(routes!(controller::user::get_current_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
