//! Tests for the vote_formation endpoint.
//!
//! This module verifies the vote_formation endpoint's behavior, including
//! voting on curated formations and rejection of community formations and
//! out-of-range vote values.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use muster::{
    model::formation::VoteDto,
    server::{controller::formation::vote_formation, model::session::user::SessionUserId},
};

use super::*;

/// Tests successful vote on a curated formation.
///
/// Verifies that the vote_formation endpoint returns a 200 OK response with
/// the recomputed tally when a logged-in user votes on a curated formation.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_curated_formation() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_curated_formation("Banner Standard")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = vote_formation(
        State(test.to_app_state()),
        test.session,
        Path(formation.id),
        Json(VoteDto { value: 1 }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 400 response when voting on a community formation.
///
/// Verifies that the vote_formation endpoint returns a 400 BAD REQUEST
/// response when the target formation is not curated.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_community_formation() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let owner = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_formation(Some(owner.id), "Cavalry Rush")
        .await?;
    SessionUserId::insert(&test.session, owner.id).await.unwrap();

    let result = vote_formation(
        State(test.to_app_state()),
        test.session,
        Path(formation.id),
        Json(VoteDto { value: 1 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 400 response for an out-of-range vote value.
///
/// Verifies that the vote_formation endpoint returns a 400 BAD REQUEST
/// response when the submitted value is not +1 or -1.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_invalid_vote_value() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let formation = test
        .formation()
        .insert_curated_formation("Banner Standard")
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = vote_formation(
        State(test.to_app_state()),
        test.session,
        Path(formation.id),
        Json(VoteDto { value: 5 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
