//! Tests for the delete_formation endpoint.
//!
//! This module verifies the delete_formation endpoint's behavior, including
//! owner deletion and authentication requirements.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use muster::server::{
    controller::formation::delete_formation, model::session::user::SessionUserId,
};

use super::*;

/// Tests successful deletion by the owner.
///
/// Verifies that the delete_formation endpoint returns a 204 NO CONTENT
/// response when the owner deletes their formation.
///
/// Expected: Ok with 204 NO_CONTENT response
#[tokio::test]
async fn no_content_for_owner() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let owner = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_formation(Some(owner.id), "Cavalry Rush")
        .await?;
    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let result = delete_formation(
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

/// Tests 401 response when no user is logged in.
///
/// Verifies that the delete_formation endpoint returns a 401 UNAUTHORIZED
/// response when there is no user ID in the session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let owner = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_formation(Some(owner.id), "Cavalry Rush")
        .await?;

    let result = delete_formation(
        State(test.to_app_state()),
        test.session,
        Path(formation.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
