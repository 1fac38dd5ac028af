use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Handler-facing error response.
///
/// Not-found and validation failures carry their message to the client;
/// anything internal answers with a fixed body and the cause stays in the
/// server log.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(String),
    Internal,
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({"message": msg}))).into_response()
            }
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({"error": msg}))).into_response()
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Internal Server Error"})),
            )
                .into_response(),
        }
    }
}
