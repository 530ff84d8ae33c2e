use axum::{extract::State, http::StatusCode, response::IntoResponse};
use warhold::{controller::alliance::get_alliances, model::session::user::SessionUserId};

use super::*;

/// Expect 200 OK with the alliances managed by the logged in user
#[tokio::test]
async fn returns_managed_alliances() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let manager = test.user().insert_user().await?;
    let other_manager = test.user().insert_user().await?;
    test.game().insert_alliance(manager.id).await?;
    test.game().insert_alliance(other_manager.id).await?;

    SessionUserId::insert(&test.session, manager.id).await.unwrap();

    let result = get_alliances(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 OK with an empty list for a user managing no alliances
#[tokio::test]
async fn returns_empty_list_for_user_with_no_alliances() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let user = test.user().insert_user().await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_alliances(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 Unauthorized when no user is in session
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_game_tables().build().await?;

    let result = get_alliances(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_alliances(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
