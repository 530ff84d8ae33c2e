use axum::{extract::State, http::StatusCode, response::IntoResponse};
use warhold::{controller::auth::get_user, model::session::user::SessionUserId};

use super::*;

/// Expect 200 OK with user information for a logged in user
#[tokio::test]
async fn returns_user_when_logged_in() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let user = test.user().insert_user().await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 Unauthorized when no user is in session
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_game_tables().build().await?;

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 Unauthorized and a cleared session when the session user is not in database
#[tokio::test]
async fn unauthorized_when_user_not_in_database() -> Result<(), TestError> {
    let test = TestBuilder::new().with_game_tables().build().await?;

    let non_existent_user_id = 999;
    SessionUserId::insert(&test.session, non_existent_user_id).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Verify session was cleared
    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let user_id = 1;
    SessionUserId::insert(&test.session, user_id).await.unwrap();

    let result = get_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
