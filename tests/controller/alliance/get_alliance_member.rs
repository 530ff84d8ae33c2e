use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use warhold::{controller::alliance::get_alliance_member, model::session::user::SessionUserId};

use super::*;

/// Expect 200 OK for a member of an alliance managed by the logged in user
#[tokio::test]
async fn returns_member_for_manager() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let manager = test.user().insert_user().await?;
    let alliance = test.game().insert_alliance(manager.id).await?;
    let member = test.game().insert_alliance_member(alliance.id).await?;

    SessionUserId::insert(&test.session, manager.id).await.unwrap();

    let result = get_alliance_member(
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
    let alliance = test.game().insert_alliance(manager.id).await?;
    let member = test.game().insert_alliance_member(alliance.id).await?;

    SessionUserId::insert(&test.session, other.id).await.unwrap();

    let result = get_alliance_member(
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

    let result = get_alliance_member(
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

/// Expect 404 Not Found, not 403, when the member's alliance has been deleted
#[tokio::test]
async fn not_found_for_dangling_member() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let manager = test.user().insert_user().await?;
    let alliance = test.game().insert_alliance(manager.id).await?;
    let member = test.game().insert_alliance_member(alliance.id).await?;
    test.game().delete_alliance(alliance.id).await?;

    SessionUserId::insert(&test.session, manager.id).await.unwrap();

    let result = get_alliance_member(
        State(test.into_app_state()),
        test.session.clone(),
        Path(member.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
