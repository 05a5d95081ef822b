use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::state::AppState;

// Health handler - reports environment and credential presence, never calls upstream
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "environment": state.environment,
        "hasGeminiKey": state.gemini.has_api_key(),
        "keyLength": state.gemini.api_key_len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
