//! Tests for the admin_delete_formation endpoint.
//!
//! This module verifies the admin_delete_formation endpoint's behavior,
//! including deletion of formations the admin does not own and the admin
//! gate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use muster::server::{
    controller::admin::admin_delete_formation, model::session::user::SessionUserId,
};

use super::*;

/// Tests successful deletion of another user's formation.
///
/// Verifies that the admin_delete_formation endpoint returns a 204 NO CONTENT
/// response when an admin deletes a formation they do not own.
///
/// Expected: Ok with 204 NO_CONTENT response
#[tokio::test]
async fn no_content_for_admin_on_any_formation() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let admin = test.user().insert_admin("Cao Cao").await?;
    let owner = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_private_formation(owner.id, "Secret Wedge")
        .await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = admin_delete_formation(
        State(test.to_app_state()),
        test.session,
        Path(formation.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Tests 403 response for a regular user.
///
/// Verifies that the admin_delete_formation endpoint returns a 403 FORBIDDEN
/// response when the logged-in user is not an admin, leaving the formation in
/// place.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_regular_user() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let owner = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_formation(Some(owner.id), "Cavalry Rush")
        .await?;
    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let result = admin_delete_formation(
        State(test.to_app_state()),
        test.session,
        Path(formation.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
