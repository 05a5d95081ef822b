use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("message is required")]
    MissingMessage,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("upstream call failed: {0}")]
    Upstream(String),

    #[error("empty response from model")]
    EmptyResponse,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingMessage => (StatusCode::BAD_REQUEST, "Message is required"),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests. Please try again later.",
            ),
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Gemini API key not configured",
            ),
            AppError::Upstream(_) | AppError::EmptyResponse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process your message. Please try again.",
            ),
        };

        // Full cause stays server-side, the client only sees the generic text
        if status.is_server_error() {
            tracing::error!("chat error: {self}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
