//! Tests for the admin_create_formation endpoint.
//!
//! This module verifies the admin_create_formation endpoint's behavior,
//! including curated formation creation and the admin gate.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use muster::server::{
    controller::admin::admin_create_formation, model::session::user::SessionUserId,
};

use super::*;

/// Tests successful creation by an admin.
///
/// Verifies that the admin_create_formation endpoint returns a 201 CREATED
/// response when an admin submits a valid composition.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn created_for_admin() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let admin = test.user().insert_admin("Cao Cao").await?;
    let general = test.roster().insert_general("Zhang Liao", 7).await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let dto = admin_create_dto("Banner Standard", vec![slot(general.id, 1)]);
    let result = admin_create_formation(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests 403 response for a regular user.
///
/// Verifies that the admin_create_formation endpoint returns a 403 FORBIDDEN
/// response when the logged-in user is not an admin.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_regular_user() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let general = test.roster().insert_general("Zhang Liao", 7).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let dto = admin_create_dto("Banner Standard", vec![slot(general.id, 1)]);
    let result = admin_create_formation(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
