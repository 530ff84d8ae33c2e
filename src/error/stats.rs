use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("Stats payload must be a non-empty JSON object")]
    EmptyPayload,
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyPayload => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: Self::EmptyPayload.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
