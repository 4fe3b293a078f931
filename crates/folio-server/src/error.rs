//! Server error types.

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Fatal errors while starting a server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Failed to load portfolio: {0}")]
    SourceError(#[from] crate::source::SourceError),
}

/// API-level error type.
///
/// Implements `IntoResponse` so handlers can return `Result<T, ApiError>`;
/// the body is `{ "error": { "code", "message" } }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Render error: {0}")]
    Render(#[from] folio_render::RenderError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<folio_model::StoreError> for ApiError {
    fn from(err: folio_model::StoreError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "Failed to generate the portfolio page".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
