//! Tests for the unresolve_skill_conflict endpoint.
//!
//! This module verifies the unresolve_skill_conflict endpoint's behavior,
//! including removing recorded resolutions and the status for resolutions
//! that were never recorded.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use muster::server::{
    controller::lineup::unresolve_skill_conflict, model::session::user::SessionUserId,
};

use super::*;

/// Tests successful resolution removal.
///
/// Verifies that the unresolve_skill_conflict endpoint returns a 204 NO
/// CONTENT response when the owner removes a recorded resolution.
///
/// Expected: Ok with 204 NO_CONTENT response
#[tokio::test]
async fn no_content_when_removed() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let skill = test.roster().insert_skill("Rally").await?;
    let line_up = test.lineup().insert_line_up(user.id, "Campaign Plan").await?;
    test.lineup()
        .insert_resolution(line_up.id, skill.id, true, None)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = unresolve_skill_conflict(
        State(test.to_app_state()),
        test.session,
        Path((line_up.id, skill.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Tests 404 response when no resolution was recorded.
///
/// Verifies that the unresolve_skill_conflict endpoint returns a 404 NOT
/// FOUND response when the line-up has no resolution for the named skill.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_without_recorded_resolution() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    let skill = test.roster().insert_skill("Rally").await?;
    let line_up = test.lineup().insert_line_up(user.id, "Campaign Plan").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = unresolve_skill_conflict(
        State(test.to_app_state()),
        test.session,
        Path((line_up.id, skill.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
