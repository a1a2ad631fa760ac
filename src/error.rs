use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// ApiError
///
/// The JSON error surface of the API. Every failure outside the access gate
/// (which redirects instead) maps to one of these variants and is serialized
/// as `{"error": "..."}` with the matching status code. There are no retry
/// semantics; each request is an independent all-or-nothing call.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not found")]
    NotFound,

    // A required integration (admin credentials, email relay) is missing
    // from the environment. Surfaced as a server error, not a client one.
    #[error("{0}")]
    NotConfigured(&'static str),

    #[error("Failed to send message")]
    RelayFailed,

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RelayFailed => StatusCode::BAD_GATEWAY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
