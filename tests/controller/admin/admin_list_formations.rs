//! Tests for the admin_list_formations endpoint.
//!
//! This module verifies the admin_list_formations endpoint's behavior,
//! covering the admin gate for every caller class.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use muster::{
    model::formation::FormationListQuery,
    server::{controller::admin::admin_list_formations, model::session::user::SessionUserId},
};

use super::*;

/// Tests successful listing for an admin.
///
/// Verifies that the admin_list_formations endpoint returns a 200 OK response
/// for a logged-in admin, including private formations of other users.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_admin() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let admin = test.user().insert_admin("Cao Cao").await?;
    let owner = test.user().insert_user("Pan Feng").await?;
    test.formation()
        .insert_private_formation(owner.id, "Secret Wedge")
        .await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    let result = admin_list_formations(
        State(test.to_app_state()),
        test.session,
        Query(FormationListQuery::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 403 response for a regular user.
///
/// Verifies that the admin_list_formations endpoint returns a 403 FORBIDDEN
/// response when the logged-in user is not an admin.
///
/// Expected: Err with 403 FORBIDDEN response
#[tokio::test]
async fn forbidden_for_regular_user() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let user = test.user().insert_user("Pan Feng").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = admin_list_formations(
        State(test.to_app_state()),
        test.session,
        Query(FormationListQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests 401 response when no user is logged in.
///
/// Verifies that the admin_list_formations endpoint returns a 401
/// UNAUTHORIZED response when there is no user ID in the session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_muster_tables!()?;

    let result = admin_list_formations(
        State(test.to_app_state()),
        test.session,
        Query(FormationListQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
