//! Tests for the copy_formation endpoint.
//!
//! This module verifies the copy_formation endpoint's behavior, including
//! copying visible formations and the invisibility of other users' private
//! formations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use muster::server::{controller::formation::copy_formation, model::session::user::SessionUserId};

use super::*;

/// Tests successful copy of a public formation.
///
/// Verifies that the copy_formation endpoint returns a 201 CREATED response
/// when a logged-in user copies a public formation into their collection.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn created_for_public_formation() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let owner = test.user().insert_user("Pan Feng").await?;
    let copier = test.user().insert_user("Han Fu").await?;
    let general = test.roster().insert_general("Zhang Liao", 7).await?;
    let formation = test
        .formation()
        .insert_formation(Some(owner.id), "Cavalry Rush")
        .await?;
    test.formation()
        .insert_slot(formation.id, general.id, 1, None, None)
        .await?;
    SessionUserId::insert(&test.session, copier.id)
        .await
        .unwrap();

    let result = copy_formation(State(test.to_app_state()), test.session, Path(formation.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests 404 response for another user's private formation.
///
/// Verifies that the copy_formation endpoint returns a 404 NOT FOUND response
/// when the source formation is private and owned by someone else.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_for_other_users_private_formation() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let owner = test.user().insert_user("Pan Feng").await?;
    let copier = test.user().insert_user("Han Fu").await?;
    let formation = test
        .formation()
        .insert_private_formation(owner.id, "Secret Wedge")
        .await?;
    SessionUserId::insert(&test.session, copier.id)
        .await
        .unwrap();

    let result = copy_formation(State(test.to_app_state()), test.session, Path(formation.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
