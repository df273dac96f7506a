use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Everything a handler can fail with, mapped onto the HTTP surface.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or invalid required field.
    Validation(String),
    /// Unknown id; carries the resource noun for the message.
    NotFound(&'static str),
    /// Double-booking, or an operation that is illegal at this point of the
    /// match lifecycle.
    Conflict(String),
    /// Pool or query failure. Logged, not leaked.
    Internal(anyhow::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, format!("{resource} not found"))
            }
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::Internal(err) => {
                log::error!("Internal error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}
