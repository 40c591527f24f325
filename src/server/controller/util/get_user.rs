use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId},
};

/// Retrieves the calling user from their session and then from the database
///
/// # Returns
/// - `Ok(Model)`: The caller's user row
/// - `Err(Error::AuthError(UserNotInSession))`: No user ID in the session
/// - `Err(Error::AuthError(UserNotInDatabase))`: Session user no longer
///   exists; the session is cleared so the caller can log in again
/// - `Err(Error)`: Internal errors (database query failures, session errors)
pub async fn get_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<entity::muster_user::Model, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserRepository::new(&state.db).get(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Retrieves the calling user when logged in, or `None` for anonymous
/// callers. A session pointing at a deleted user is cleared and treated
/// as anonymous rather than rejected, since the endpoints taking an
/// optional identity serve anonymous callers anyway.
pub async fn get_optional_user(
    state: &AppState,
    session: &Session,
) -> Result<Option<entity::muster_user::Model>, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Ok(None);
    };

    let user = UserRepository::new(&state.db).get(user_id).await?;
    if user.is_none() {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );
    }

    Ok(user)
}

/// Retrieves the calling user and requires them to be an administrator
///
/// # Returns
/// - `Ok(Model)`: The caller's user row, `is_admin` guaranteed
/// - `Err(Error::AuthError(NotAdmin))`: Logged in but not an administrator
/// - `Err(Error)`: As [`get_user_from_session`]
pub async fn get_admin_from_session(
    state: &AppState,
    session: &Session,
) -> Result<entity::muster_user::Model, Error> {
    let user = get_user_from_session(state, session).await?;

    if !user.is_admin {
        return Err(Error::AuthError(AuthError::NotAdmin(user.id)));
    }

    Ok(user)
}
