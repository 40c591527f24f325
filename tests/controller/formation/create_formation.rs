//! Tests for the create_formation endpoint.
//!
//! This module verifies the create_formation endpoint's behavior, including
//! successful creation, authentication requirements, and composition
//! validation failures.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use muster::server::{controller::formation::create_formation, model::session::user::SessionUserId};

use super::*;

/// Tests successful formation creation.
///
/// Verifies that the create_formation endpoint returns a 201 CREATED response
/// when a logged-in user submits a valid composition.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn created_for_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let general = test.roster().insert_general("Zhang Liao", 7).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let dto = create_dto("Cavalry Rush", vec![slot(general.id, 1)]);
    let result = create_formation(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests 401 response when no user is logged in.
///
/// Verifies that the create_formation endpoint returns a 401 UNAUTHORIZED
/// response when there is no user ID in the session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let general = test.roster().insert_general("Zhang Liao", 7).await?;

    let dto = create_dto("Cavalry Rush", vec![slot(general.id, 1)]);
    let result = create_formation(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests 400 response for a composition over the cost budget.
///
/// Verifies that the create_formation endpoint returns a 400 BAD REQUEST
/// response when the submitted generals cost more than the deployment budget
/// allows.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_when_over_cost_budget() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let expensive = test.roster().insert_general("Lu Bu", 12).await?;
    let heavy = test.roster().insert_general("Dong Zhuo", 12).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let dto = create_dto(
        "Overloaded",
        vec![slot(expensive.id, 1), slot(heavy.id, 2)],
    );
    let result = create_formation(State(test.to_app_state()), test.session, Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
