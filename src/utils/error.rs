use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use thiserror::Error;

use crate::store::StoreError;
use crate::utils::bucket::InvalidRangeError;

/// Failures a route handler can report to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid {field}: {value}")]
    InvalidId { field: &'static str, value: String },
    #[error("Participant not found")]
    ParticipantNotFound,
    #[error("Trip not found")]
    TripNotFound,
    #[error("Trip dates are invalid: {0}")]
    InvalidRange(#[from] InvalidRangeError),
    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId { .. }
            | ApiError::ParticipantNotFound
            | ApiError::TripNotFound => StatusCode::BAD_REQUEST,
            ApiError::InvalidRange(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Store(e) => {
                error!("Request failed on storage: {e}");
                json_error_response(status, "Internal server error")
            }
            other => json_error_response(status, &other.to_string()),
        }
    }
}

/// Generate HTTP response with a JSON error body
pub fn json_error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}
