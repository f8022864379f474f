use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("player not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

/// Error body: always a human-readable `message`, plus the raw driver/parse
/// error under `error` except for plain not-found responses.
#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Player not found", None),
            ApiError::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database operation failed",
                Some(err.to_string()),
            ),
            // Unparseable dates in the range filter share the generic 500
            // path, matching the observed behavior of the service this
            // replaces.
            ApiError::InvalidDate(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid date filter",
                Some(err.to_string()),
            ),
            ApiError::InvalidBody(err) => (
                StatusCode::BAD_REQUEST,
                "Invalid player payload",
                Some(err.to_string()),
            ),
        };

        let body = Json(ErrorResponse {
            message: message.to_string(),
            error: detail,
        });

        (status, body).into_response()
    }
}
