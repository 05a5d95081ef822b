use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;
use std::time::Instant;

use crate::error::AppError;
use crate::metrics::{
    CHAT_REQUESTS_TOTAL, RATE_LIMITED_TOTAL, UPSTREAM_ERRORS_TOTAL, UPSTREAM_LATENCY,
};
use crate::models::{ChatRequest, ChatResponse};
use crate::prompt::build_prompt;
use crate::rate_limit::client_key;
use crate::state::AppState;

// POST handler - validate, rate-limit, assemble the prompt, call the model
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    CHAT_REQUESTS_TOTAL.inc();

    // Input check runs before the limiter, so bad requests never consume quota
    let message = payload
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or(AppError::MissingMessage)?;

    let key = client_key(&headers);
    if !state.rate_limiter.check(&key) {
        RATE_LIMITED_TOTAL.inc();
        return Err(AppError::RateLimited);
    }

    let prompt = build_prompt(&payload.conversation_history, message, state.history_limit);

    let start = Instant::now();
    let text = state
        .gemini
        .generate(&prompt)
        .await
        .inspect_err(|_| UPSTREAM_ERRORS_TOTAL.inc())?;
    UPSTREAM_LATENCY.observe(start.elapsed().as_secs_f64());

    Ok(Json(ChatResponse { response: text }))
}

// GET probe - reports readiness without touching the model
pub async fn chat_ready_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ready",
        "hasApiKey": state.gemini.has_api_key(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
