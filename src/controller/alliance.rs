use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    controller::util::principal::get_principal,
    error::Error,
    model::{
        api::{AllianceDto, AllianceMemberDto, BattleEventDto, ErrorDto},
        app::AppState,
    },
    service::alliance::AllianceService,
};

pub static ALLIANCE_TAG: &str = "alliance";

/// Get all alliances managed by the logged in user
#[utoipa::path(
    get,
    path = "/api/alliances",
    tag = ALLIANCE_TAG,
    responses(
        (status = 200, description = "Success when retrieving managed alliances", body = Vec<AllianceDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alliances(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_principal(&state, &session).await?;

    let alliances = AllianceService::new(&state.db).list_managed(user_id).await?;

    Ok((StatusCode::OK, axum::Json(alliances)).into_response())
}

/// Get all members of an alliance managed by the logged in user
#[utoipa::path(
    get,
    path = "/api/alliances/{alliance_id}/members",
    tag = ALLIANCE_TAG,
    params(
        ("alliance_id" = i32, Path, description = "ID of the alliance to list members for")
    ),
    responses(
        (status = 200, description = "Success when retrieving alliance members", body = Vec<AllianceMemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Alliance is managed by another user", body = ErrorDto),
        (status = 404, description = "Alliance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alliance_members(
    State(state): State<AppState>,
    session: Session,
    Path(alliance_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_principal(&state, &session).await?;

    let members = AllianceService::new(&state.db)
        .list_members(user_id, alliance_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(members)).into_response())
}

/// Get a single alliance member belonging to an alliance managed by the logged in user
#[utoipa::path(
    get,
    path = "/api/members/{member_id}",
    tag = ALLIANCE_TAG,
    params(
        ("member_id" = i32, Path, description = "ID of the alliance member to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving the alliance member", body = AllianceMemberDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Member belongs to an alliance managed by another user", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alliance_member(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_principal(&state, &session).await?;

    let member = AllianceService::new(&state.db)
        .get_member(user_id, member_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(member)).into_response())
}

/// Get all battle events recorded for an alliance member
#[utoipa::path(
    get,
    path = "/api/members/{member_id}/battle-events",
    tag = ALLIANCE_TAG,
    params(
        ("member_id" = i32, Path, description = "ID of the alliance member to list battle events for")
    ),
    responses(
        (status = 200, description = "Success when retrieving battle events", body = Vec<BattleEventDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Member belongs to an alliance managed by another user", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member_battle_events(
    State(state): State<AppState>,
    session: Session,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_principal(&state, &session).await?;

    let events = AllianceService::new(&state.db)
        .list_battle_events(user_id, member_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(events)).into_response())
}

/// Get a single battle event recorded for an alliance member
#[utoipa::path(
    get,
    path = "/api/battle-events/{event_id}",
    tag = ALLIANCE_TAG,
    params(
        ("event_id" = i32, Path, description = "ID of the battle event to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving the battle event", body = BattleEventDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Event belongs to an alliance managed by another user", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battle_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_principal(&state, &session).await?;

    let event = AllianceService::new(&state.db)
        .get_battle_event(user_id, event_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(event)).into_response())
}
