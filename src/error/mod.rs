//! Error types for the Warhold server application.
//!
//! This module provides a comprehensive error handling system with specialized error types
//! for different domains (authentication, resource access, stat records, configuration).
//! All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait implementations.

pub mod access;
pub mod auth;
pub mod config;
pub mod stats;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{access::AccessError, auth::AuthError, config::ConfigError, stats::StatsError},
    model::api::ErrorDto,
};

/// Main error type for the Warhold server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse`
/// implementation maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (no session, stale session)
/// - Access errors (resource missing, caller not the controller)
/// - Stat record errors (invalid write payloads)
/// - External library errors (database, sessions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session missing or referencing a deleted user).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Access error (resource not found or caller is not its controller).
    #[error(transparent)]
    AccessError(#[from] AccessError),
    /// Stat record error (write payload failed a precondition).
    #[error(transparent)]
    StatsError(#[from] StatsError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Denial paths (`AuthError`, `AccessError`) return generic messages so that internal
/// detail is never leaked across the authorization boundary; everything else falls back
/// to a logged 500 with a generic body.
///
/// # Returns
/// - 400 Bad Request - For invalid write payloads
/// - 401 Unauthorized - For authentication failures
/// - 403 Forbidden - For callers that are not the controller of a resource
/// - 404 Not Found - For missing resources (including missing ownership chain hops)
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::AccessError(err) => err.into_response(),
            Self::StatsError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings, including store failures.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
