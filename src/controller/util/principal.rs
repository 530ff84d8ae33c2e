use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId},
    service::user::UserService,
};

/// Resolves the authenticated user for a request.
///
/// This is the single authentication guard every handler runs before touching
/// any data: session → user ID → database existence check. Downstream code
/// treats the returned ID as trusted and performs no further credential
/// validation.
///
/// # Returns
/// - `Ok(user_id)`: The authenticated user's ID
/// - `Err(Error::AuthError(NotLoggedIn))`: User ID not present in session
/// - `Err(Error::AuthError(UserNotInDatabase))`: User ID in session but not in
///   the database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors)
pub async fn get_principal(state: &AppState, session: &Session) -> Result<i32, Error> {
    // Get user from session
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::NotLoggedIn));
    };

    // Confirm the user still exists in the database
    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user.id)
}
