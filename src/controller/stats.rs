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
        api::{ErrorDto, StatsDto, UpdateStatsDto},
        app::AppState,
        stats::StatKind,
    },
    service::stats::StatsService,
};

pub static STATS_TAG: &str = "stats";

/// Get the logged in user's stat record of the given kind
#[utoipa::path(
    get,
    path = "/api/stats/{kind}",
    tag = STATS_TAG,
    params(
        ("kind" = StatKind, Path, description = "Stat record kind")
    ),
    responses(
        (status = 200, description = "Success when retrieving the stat record", body = StatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No stat record of this kind has been written", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
    Path(kind): Path<StatKind>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_principal(&state, &session).await?;

    let maybe_stats = StatsService::new(&state.db).get_stats(user_id, kind).await?;

    let Some(stats) = maybe_stats else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(stats)).into_response())
}

/// Create or replace the logged in user's stat record of the given kind
///
/// The record is keyed by the authenticated user and the kind in the path;
/// the request body carries no resource identifier, so the write can only ever
/// touch the caller's own record.
#[utoipa::path(
    put,
    path = "/api/stats/{kind}",
    tag = STATS_TAG,
    params(
        ("kind" = StatKind, Path, description = "Stat record kind")
    ),
    request_body = UpdateStatsDto,
    responses(
        (status = 200, description = "Success when storing the stat record", body = StatsDto),
        (status = 400, description = "Stats payload must be a non-empty JSON object", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_stats(
    State(state): State<AppState>,
    session: Session,
    Path(kind): Path<StatKind>,
    axum::Json(body): axum::Json<UpdateStatsDto>,
) -> Result<impl IntoResponse, Error> {
    let user_id = get_principal(&state, &session).await?;

    let stats = StatsService::new(&state.db)
        .upsert_stats(user_id, kind, body.stats)
        .await?;

    Ok((StatusCode::OK, axum::Json(stats)).into_response())
}
