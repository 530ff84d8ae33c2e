use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use warhold::{controller::alliance::get_battle_event, model::session::user::SessionUserId};

use super::*;

/// Expect 200 OK for a battle event reachable through the logged in user's chain
#[tokio::test]
async fn returns_event_for_manager() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let manager = test.user().insert_user().await?;
    let (_, _, event) = test.game().insert_chain(manager.id).await?;

    SessionUserId::insert(&test.session, manager.id).await.unwrap();

    let result = get_battle_event(
        State(test.into_app_state()),
        test.session.clone(),
        Path(event.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden for an event in another user's chain
#[tokio::test]
async fn forbidden_for_other_users_event() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let manager = test.user().insert_user().await?;
    let other = test.user().insert_user().await?;
    let (_, _, event) = test.game().insert_chain(manager.id).await?;

    SessionUserId::insert(&test.session, other.id).await.unwrap();

    let result = get_battle_event(
        State(test.into_app_state()),
        test.session.clone(),
        Path(event.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 Not Found for an event that does not exist
#[tokio::test]
async fn not_found_for_missing_event() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let user = test.user().insert_user().await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_battle_event(
        State(test.into_app_state()),
        test.session.clone(),
        Path(999),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found, not 403, once the chain above the event is broken
#[tokio::test]
async fn not_found_for_broken_chain() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let manager = test.user().insert_user().await?;
    let (alliance, _, event) = test.game().insert_chain(manager.id).await?;
    test.game().delete_alliance(alliance.id).await?;

    SessionUserId::insert(&test.session, manager.id).await.unwrap();

    let result = get_battle_event(
        State(test.into_app_state()),
        test.session.clone(),
        Path(event.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
