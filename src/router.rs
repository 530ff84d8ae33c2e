//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI annotations,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Every data route runs the same pipeline: resolve the principal from the
/// session, authorize the requested resource, then fetch it. Each endpoint is
/// annotated with OpenAPI metadata via utoipa, which is collected into
/// a unified OpenAPI document served at `/api/docs/openapi.json` with Swagger
/// UI at `/api/docs`.
///
/// # Registered Endpoints
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/alliances` - List alliances managed by current user
/// - `GET /api/alliances/{alliance_id}/members` - List members of a managed alliance
/// - `GET /api/members/{member_id}` - Get a single alliance member
/// - `GET /api/members/{member_id}/battle-events` - List a member's battle events
/// - `GET /api/battle-events/{event_id}` - Get a single battle event
/// - `GET /api/stats/{kind}` - Get current user's stat record of a kind
/// - `PUT /api/stats/{kind}` - Create or replace current user's stat record
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Warhold", description = "Warhold API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::alliance::ALLIANCE_TAG, description = "Alliance and battle event API routes"),
        (name = controller::stats::STATS_TAG, description = "Stat record API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::alliance::get_alliances))
        .routes(routes!(controller::alliance::get_alliance_members))
        .routes(routes!(controller::alliance::get_alliance_member))
        .routes(routes!(controller::alliance::get_member_battle_events))
        .routes(routes!(controller::alliance::get_battle_event))
        .routes(routes!(controller::stats::get_stats))
        .routes(routes!(controller::stats::update_stats))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
