//! Tests for the update_line_up endpoint.
//!
//! This module verifies the update_line_up endpoint's behavior, including
//! renames and the conflict status for invalid membership replacements.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use muster::{
    model::lineup::UpdateLineUpDto,
    server::{controller::lineup::update_line_up, model::session::user::SessionUserId},
};

use super::*;

/// Tests successful rename by the owner.
///
/// Verifies that the update_line_up endpoint returns a 200 OK response when
/// the owner renames their line-up without touching the membership.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_rename() -> Result<(), TestError> {
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

    let dto = UpdateLineUpDto {
        name: Some("Autumn Campaign".to_string()),
        formation_ids: None,
    };
    let result = update_line_up(
        State(test.to_app_state()),
        test.session,
        Path(line_up.id),
        Json(dto),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 409 response for a replacement sharing a general.
///
/// Verifies that the update_line_up endpoint returns a 409 CONFLICT response
/// when the replacement membership fields the same general twice.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_for_replacement_sharing_a_general() -> Result<(), TestError> {
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
    let line_up = test.lineup().insert_line_up(user.id, "Campaign Plan").await?;
    test.lineup()
        .insert_line_up_formation(line_up.id, first.id, 1)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let dto = UpdateLineUpDto {
        name: None,
        formation_ids: Some(vec![first.id, second.id]),
    };
    let result = update_line_up(
        State(test.to_app_state()),
        test.session,
        Path(line_up.id),
        Json(dto),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests 404 response for another user's line-up.
///
/// Verifies that the update_line_up endpoint returns a 404 NOT FOUND response
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

    let dto = UpdateLineUpDto {
        name: Some("Hijacked".to_string()),
        formation_ids: None,
    };
    let result = update_line_up(
        State(test.to_app_state()),
        test.session,
        Path(line_up.id),
        Json(dto),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
