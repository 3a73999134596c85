use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Request-handling failures. The variants keep the cause distinguishable
/// for server-side logs; everything except validation crosses the HTTP
/// boundary as the same opaque 500 body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("message is required")]
    EmptyMessage,

    #[error("completion provider call failed: {0:#}")]
    Provider(anyhow::Error),

    #[error("translation record write failed: {0:#}")]
    Persistence(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::EmptyMessage => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "message is required" }),
            ),
            ApiError::Provider(_) | ApiError::Persistence(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal Server Error" }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
