use crate::gemini::GeminiClient;
use crate::rate_limit::RateLimiter;

// App's shared state
pub struct AppState {
    pub gemini: GeminiClient,
    pub rate_limiter: RateLimiter,
    pub history_limit: usize, // prior turns kept in the prompt
    pub environment: String,
}
