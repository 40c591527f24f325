//! Tests for the delete_line_up endpoint.
//!
//! This module verifies the delete_line_up endpoint's behavior, including
//! owner deletion and the invisibility of other users' line-ups.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use muster::server::{controller::lineup::delete_line_up, model::session::user::SessionUserId};

use super::*;

/// Tests successful deletion by the owner.
///
/// Verifies that the delete_line_up endpoint returns a 204 NO CONTENT
/// response when the owner deletes their line-up.
///
/// Expected: Ok with 204 NO_CONTENT response
#[tokio::test]
async fn no_content_for_owner() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let line_up = test.lineup().insert_line_up(user.id, "Campaign Plan").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = delete_line_up(State(test.to_app_state()), test.session, Path(line_up.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Tests 404 response for another user's line-up.
///
/// Verifies that the delete_line_up endpoint returns a 404 NOT FOUND response
/// when the caller does not own the line-up.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_other_users_line_up() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let owner = test.user().insert_user("Pan Feng").await?;
    let intruder = test.user().insert_user("Han Fu").await?;
    let line_up = test
        .lineup()
        .insert_line_up(owner.id, "Campaign Plan")
        .await?;
    SessionUserId::insert(&test.session, intruder.id)
        .await
        .unwrap();

    let result = delete_line_up(State(test.to_app_state()), test.session, Path(line_up.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
