//! Tests for the create_line_up endpoint.
//!
//! This module verifies the create_line_up endpoint's behavior, including
//! successful creation, the general conflict rejection status, and
//! membership validation failures.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use muster::server::{controller::lineup::create_line_up, model::session::user::SessionUserId};

use super::*;

/// Tests successful line-up creation.
///
/// Verifies that the create_line_up endpoint returns a 201 CREATED response
/// when the member formations share no generals.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn created_for_conflict_free_members() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let first_general = test.roster().insert_general("Zhang Liao", 7).await?;
    let second_general = test.roster().insert_general("Xu Huang", 6).await?;
    let first = test
        .formation()
        .insert_formation(Some(user.id), "Cavalry Rush")
        .await?;
    let second = test
        .formation()
        .insert_formation(Some(user.id), "Shield Wall")
        .await?;
    test.formation()
        .insert_slot(first.id, first_general.id, 1, None, None)
        .await?;
    test.formation()
        .insert_slot(second.id, second_general.id, 1, None, None)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let dto = create_dto("Campaign Plan", vec![first.id, second.id]);
    let result = create_line_up(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests 409 response when formations share a general.
///
/// Verifies that the create_line_up endpoint returns a 409 CONFLICT response
/// when two member formations field the same general.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_when_formations_share_a_general() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let shared = test.roster().insert_general("Zhang Liao", 7).await?;
    let first = test
        .formation()
        .insert_formation(Some(user.id), "Cavalry Rush")
        .await?;
    let second = test
        .formation()
        .insert_formation(Some(user.id), "Shield Wall")
        .await?;
    test.formation()
        .insert_slot(first.id, shared.id, 1, None, None)
        .await?;
    test.formation()
        .insert_slot(second.id, shared.id, 1, None, None)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let dto = create_dto("Campaign Plan", vec![first.id, second.id]);
    let result = create_line_up(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests 400 response for a blank name.
///
/// Verifies that the create_line_up endpoint returns a 400 BAD REQUEST
/// response when the submitted name is only whitespace.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_blank_name() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_formation(Some(user.id), "Cavalry Rush")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let dto = create_dto("   ", vec![formation.id]);
    let result = create_line_up(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 404 response for a missing member formation.
///
/// Verifies that the create_line_up endpoint returns a 404 NOT FOUND response
/// when one of the requested formation IDs has no backing row.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_missing_formation() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let dto = create_dto("Campaign Plan", vec![42]);
    let result = create_line_up(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests 401 response when no user is logged in.
///
/// Verifies that the create_line_up endpoint returns a 401 UNAUTHORIZED
/// response when there is no user ID in the session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let dto = create_dto("Campaign Plan", vec![1]);
    let result = create_line_up(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
