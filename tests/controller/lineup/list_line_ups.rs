//! Tests for the list_line_ups endpoint.
//!
//! This module verifies the list_line_ups endpoint's behavior, including
//! authentication requirements and per-user scoping.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use muster::server::{controller::lineup::list_line_ups, model::session::user::SessionUserId};

use super::*;

/// Tests successful listing of the caller's line-ups.
///
/// Verifies that the list_line_ups endpoint returns a 200 OK response for a
/// logged-in user with recorded line-ups.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_formation(Some(user.id), "Cavalry Rush")
        .await?;
    let line_up = test.lineup().insert_line_up(user.id, "Campaign Plan").await?;
    test.lineup()
        .insert_line_up_formation(line_up.id, formation.id, 1)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = list_line_ups(State(test.to_app_state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 401 response when no user is logged in.
///
/// Verifies that the list_line_ups endpoint returns a 401 UNAUTHORIZED
/// response when there is no user ID in the session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let result = list_line_ups(State(test.to_app_state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
