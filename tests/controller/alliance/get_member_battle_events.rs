use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use warhold::{
    controller::alliance::get_member_battle_events, model::session::user::SessionUserId,
};

use super::*;

/// Expect 200 OK with the battle events of a member the logged in user controls
#[tokio::test]
async fn returns_events_for_manager() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let manager = test.user().insert_user().await?;
    let (_, member, _) = test.game().insert_chain(manager.id).await?;
    test.game().insert_battle_event(member.id).await?;

    SessionUserId::insert(&test.session, manager.id).await.unwrap();

    let result = get_member_battle_events(
        State(test.into_app_state()),
        test.session.clone(),
        Path(member.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden for a member of another user's alliance
#[tokio::test]
async fn forbidden_for_other_users_member() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let manager = test.user().insert_user().await?;
    let other = test.user().insert_user().await?;
    let (_, member, _) = test.game().insert_chain(manager.id).await?;

    SessionUserId::insert(&test.session, other.id).await.unwrap();

    let result = get_member_battle_events(
        State(test.into_app_state()),
        test.session.clone(),
        Path(member.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 404 Not Found for a member that does not exist
#[tokio::test]
async fn not_found_for_missing_member() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let user = test.user().insert_user().await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_member_battle_events(
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
