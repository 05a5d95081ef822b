use axum::http::HeaderMap;
use dashmap::DashMap;
use std::time::{Duration, Instant};

// Rate limit entry - tracks requests per client key
struct RateLimitEntry {
    count: u32,
    reset_at: Instant,
}

// Fixed-window counter, one entry per client key
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    entries: DashMap<String, RateLimitEntry>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            entries: DashMap::new(),
        }
    }

    // Allow or deny one request from `key`
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();

        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(RateLimitEntry {
                count: 0,
                reset_at: now + self.window,
            });

        // Window expired? Reset it
        if now >= entry.reset_at {
            entry.count = 1;
            entry.reset_at = now + self.window;
            return true;
        }

        // Under limit? Allow
        if entry.count < self.max_requests {
            entry.count += 1;
            return true;
        }

        // Over limit
        false
    }

    // Drops entries whose window has elapsed, keeping the map bounded
    pub fn sweep(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| now < entry.reset_at);
    }

    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }
}

// Best-effort client key from the forwarded-address header
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
