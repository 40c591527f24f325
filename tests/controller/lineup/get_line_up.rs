//! Tests for the get_line_up endpoint.
//!
//! This module verifies the get_line_up endpoint's behavior, including
//! detail retrieval by the owner and the invisibility of other users'
//! line-ups.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use muster::server::{controller::lineup::get_line_up, model::session::user::SessionUserId};

use super::*;

/// Tests successful detail retrieval by the owner.
///
/// Verifies that the get_line_up endpoint returns a 200 OK response with the
/// expanded detail view for the line-up's owner.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_owner() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let general = test.roster().insert_general("Zhang Liao", 7).await?;
    let formation = test
        .formation()
        .insert_formation(Some(user.id), "Cavalry Rush")
        .await?;
    test.formation()
        .insert_slot(formation.id, general.id, 1, None, None)
        .await?;
    let line_up = test.lineup().insert_line_up(user.id, "Campaign Plan").await?;
    test.lineup()
        .insert_line_up_formation(line_up.id, formation.id, 1)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_line_up(State(test.to_app_state()), test.session, Path(line_up.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 404 response for another user's line-up.
///
/// Verifies that the get_line_up endpoint returns a 404 NOT FOUND response
/// when the caller does not own the line-up, without revealing that it
/// exists.
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

    let result = get_line_up(State(test.to_app_state()), test.session, Path(line_up.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
