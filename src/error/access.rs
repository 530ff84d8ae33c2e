use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Denial outcomes from the authorization decision point.
///
/// "Resource not found" and "not authorized" stay distinct throughout: collapsing
/// them would leak resource existence across the authorization boundary. A missing
/// row anywhere in an ownership chain surfaces as `NotFound`, never `Forbidden`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccessError {
    #[error("Resource not found")]
    NotFound,
    #[error("Caller does not control the requested resource")]
    Forbidden,
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => {
                tracing::debug!("{}", Self::NotFound);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Forbidden => {
                tracing::debug!("{}", Self::Forbidden);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Forbidden".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
