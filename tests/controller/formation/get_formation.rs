//! Tests for the get_formation endpoint.
//!
//! This module verifies the get_formation endpoint's behavior, including
//! public access, private formation visibility, and missing formations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use muster::server::{controller::formation::get_formation, model::session::user::SessionUserId};

use super::*;

/// Tests successful retrieval of a public formation.
///
/// Verifies that the get_formation endpoint returns a 200 OK response for a
/// public formation requested without any session.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_public_formation() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let owner = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_formation(Some(owner.id), "Cavalry Rush")
        .await?;

    let result = get_formation(State(test.to_app_state()), test.session, Path(formation.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 404 response for another user's private formation.
///
/// Verifies that the get_formation endpoint returns a 404 NOT FOUND response
/// when a logged-in user requests a private formation they do not own.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_other_users_private_formation() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let owner = test.user().insert_user("Pan Feng").await?;
    let viewer = test.user().insert_user("Han Fu").await?;
    let formation = test
        .formation()
        .insert_private_formation(owner.id, "Secret Wedge")
        .await?;
    SessionUserId::insert(&test.session, viewer.id)
        .await
        .unwrap();

    let result = get_formation(State(test.to_app_state()), test.session, Path(formation.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests 404 response for a formation that does not exist.
///
/// Verifies that the get_formation endpoint returns a 404 NOT FOUND response
/// for an ID with no backing row.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_nonexistent_formation() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let result = get_formation(State(test.to_app_state()), test.session, Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
