use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use warhold::{
    controller::stats::{get_stats, update_stats},
    model::{api::UpdateStatsDto, session::user::SessionUserId, stats::StatKind},
};

use super::*;

/// Expect 200 OK with the stored record after a write
#[tokio::test]
async fn returns_record_after_write() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let user = test.user().insert_user().await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let write = update_stats(
        State(test.into_app_state()),
        test.session.clone(),
        Path(StatKind::Military),
        axum::Json(UpdateStatsDto {
            stats: Some(json!({"attack": 10})),
        }),
    )
    .await;
    assert!(write.is_ok());

    let result = get_stats(
        State(test.into_app_state()),
        test.session.clone(),
        Path(StatKind::Military),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a kind the user has never written
#[tokio::test]
async fn not_found_when_unwritten() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_game_tables().build().await?;

    let user = test.user().insert_user().await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_stats(
        State(test.into_app_state()),
        test.session.clone(),
        Path(StatKind::Development),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 Unauthorized when no user is in session
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_game_tables().build().await?;

    let result = get_stats(
        State(test.into_app_state()),
        test.session.clone(),
        Path(StatKind::Military),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
