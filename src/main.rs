mod config;
mod error;
mod gemini;
mod handlers;
mod knowledge;
mod metrics;
mod models;
mod prompt;
mod rate_limit;
mod state;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use tokio::time::interval;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Args;
use gemini::GeminiClient;
use rate_limit::RateLimiter;
use state::AppState;

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/chat",
            post(handlers::chat_handler).get(handlers::chat_ready_handler),
        )
        .route("/api/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}

// Periodically evicts expired rate-limit entries so the map stays bounded
async fn rate_limit_sweeper(state: Arc<AppState>, sweep_interval: Duration) {
    let mut tick = interval(sweep_interval);
    loop {
        tick.tick().await;
        state.rate_limiter.sweep();
        metrics::RATE_LIMIT_ENTRIES.set(state.rate_limiter.tracked_keys() as f64);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let api_key = env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty());
    if api_key.is_none() {
        warn!("GEMINI_API_KEY not set - chat requests will fail until it is configured");
    }

    let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let state = Arc::new(AppState {
        gemini: GeminiClient::new(
            args.gemini_url.clone(),
            args.model.clone(),
            api_key,
            args.max_output_tokens,
        ),
        rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
        history_limit: args.history_limit,
        environment,
    });

    tokio::spawn(rate_limit_sweeper(
        state.clone(),
        Duration::from_secs(args.sweep_interval),
    ));

    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind port");

    info!("Gateway running on http://localhost:{}", args.port);
    info!("Forwarding to {} (model: {})", args.gemini_url, args.model);
    info!(
        "Rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );
    axum::serve(listener, app).await.expect("server error");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    use crate::models::{
        Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part,
    };

    struct MockUpstream {
        url: String,
        calls: Arc<AtomicUsize>,
        last_prompt: Arc<std::sync::Mutex<Option<String>>>,
    }

    impl MockUpstream {
        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_prompt(&self) -> String {
            self.last_prompt.lock().unwrap().clone().unwrap_or_default()
        }
    }

    // In-process stand-in for the Gemini API. Counts calls, records the
    // prompt it was sent, and answers with `reply` as the single candidate.
    async fn spawn_mock_upstream(reply: &'static str) -> MockUpstream {
        let calls = Arc::new(AtomicUsize::new(0));
        let last_prompt = Arc::new(std::sync::Mutex::new(None));
        let counter = calls.clone();
        let prompt_store = last_prompt.clone();

        let app = Router::new().route(
            "/v1beta/models/{model}",
            post(move |Json(req): Json<GenerateContentRequest>| {
                let counter = counter.clone();
                let prompt_store = prompt_store.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let prompt = req
                        .contents
                        .first()
                        .and_then(|content| content.parts.first())
                        .map(|part| part.text.clone());
                    *prompt_store.lock().unwrap() = prompt;
                    Json(GenerateContentResponse {
                        candidates: vec![Candidate {
                            content: Content {
                                parts: vec![Part {
                                    text: reply.to_string(),
                                }],
                            },
                        }],
                    })
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockUpstream {
            url: format!("http://{addr}"),
            calls,
            last_prompt,
        }
    }

    fn test_state(
        upstream: &str,
        api_key: Option<&str>,
        rate_limit: u32,
        window: Duration,
    ) -> Arc<AppState> {
        Arc::new(AppState {
            gemini: GeminiClient::new(
                upstream.to_string(),
                "gemini-1.5-flash".to_string(),
                api_key.map(String::from),
                512,
            ),
            rate_limiter: RateLimiter::new(rate_limit, window),
            history_limit: 6,
            environment: "test".to_string(),
        })
    }

    async fn post_chat(app: &Router, body: Value, ip: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(ip) = ip {
            builder = builder.header("x-forwarded-for", ip);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn chat_returns_model_text() {
        let upstream = spawn_mock_upstream("Palak is skilled in ...").await;
        let app = router(test_state(
            &upstream.url,
            Some("test-key"),
            20,
            Duration::from_secs(3600),
        ));

        let (status, body) = post_chat(
            &app,
            json!({"message": "What are Palak's skills?", "conversationHistory": []}),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "Palak is skilled in ...");
        assert_eq!(upstream.call_count(), 1);

        // The outbound prompt carries the biography followed by the question
        let prompt = upstream.last_prompt();
        assert!(prompt.contains("Palak Desai"));
        assert!(prompt.contains("Current User Question: What are Palak's skills?"));
    }

    #[tokio::test]
    async fn missing_message_is_rejected_before_limiting() {
        let upstream = spawn_mock_upstream("hi").await;
        // Quota of one, so any increment on the bad requests would show up below
        let app = router(test_state(
            &upstream.url,
            Some("test-key"),
            1,
            Duration::from_secs(3600),
        ));

        let (status, body) = post_chat(&app, json!({}), Some("1.2.3.4")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required");

        let (status, _) = post_chat(&app, json!({"message": "  "}), Some("1.2.3.4")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // The full quota is still available
        let (status, _) = post_chat(&app, json!({"message": "hello"}), Some("1.2.3.4")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn rate_limit_denies_after_quota() {
        let upstream = spawn_mock_upstream("ok").await;
        let app = router(test_state(
            &upstream.url,
            Some("test-key"),
            3,
            Duration::from_secs(3600),
        ));

        for _ in 0..3 {
            let (status, _) = post_chat(&app, json!({"message": "hi"}), Some("9.9.9.9")).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = post_chat(&app, json!({"message": "hi"}), Some("9.9.9.9")).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"], "Too many requests. Please try again later.");

        // A different client key still has quota
        let (status, _) = post_chat(&app, json!({"message": "hi"}), Some("8.8.8.8")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn quota_resets_after_window() {
        let upstream = spawn_mock_upstream("ok").await;
        let app = router(test_state(
            &upstream.url,
            Some("test-key"),
            1,
            Duration::from_millis(50),
        ));

        let (status, _) = post_chat(&app, json!({"message": "hi"}), Some("1.2.3.4")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = post_chat(&app, json!({"message": "hi"}), Some("1.2.3.4")).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

        tokio::time::sleep(Duration::from_millis(80)).await;

        let (status, _) = post_chat(&app, json!({"message": "hi"}), Some("1.2.3.4")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_api_key_fails_closed_without_upstream_call() {
        let upstream = spawn_mock_upstream("never").await;
        let app = router(test_state(&upstream.url, None, 20, Duration::from_secs(3600)));

        let (status, body) = post_chat(&app, json!({"message": "hi"}), None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Gemini API key not configured");
        assert_eq!(upstream.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_model_output_is_a_server_error() {
        let upstream = spawn_mock_upstream("   ").await;
        let app = router(test_state(
            &upstream.url,
            Some("test-key"),
            20,
            Duration::from_secs(3600),
        ));

        let (status, body) = post_chat(&app, json!({"message": "hi"}), None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Failed to process your message. Please try again."
        );
    }

    #[tokio::test]
    async fn readiness_probe_reports_key_presence() {
        let app = router(test_state(
            "http://127.0.0.1:9",
            Some("test-key"),
            20,
            Duration::from_secs(3600),
        ));

        let (status, body) = get_json(&app, "/api/chat").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["hasApiKey"], true);
    }

    #[tokio::test]
    async fn health_reports_environment_and_key_length() {
        let app = router(test_state(
            "http://127.0.0.1:9",
            Some("test-key"),
            20,
            Duration::from_secs(3600),
        ));

        let (status, body) = get_json(&app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["environment"], "test");
        assert_eq!(body["hasGeminiKey"], true);
        assert_eq!(body["keyLength"], 8);
    }

    #[tokio::test]
    async fn history_is_truncated_before_going_upstream() {
        let upstream = spawn_mock_upstream("ok").await;
        let app = router(test_state(
            &upstream.url,
            Some("test-key"),
            20,
            Duration::from_secs(3600),
        ));

        let history: Vec<Value> = (0..10)
            .map(|i| json!({"isUser": i % 2 == 0, "text": format!("turn-{i}")}))
            .collect();

        let (status, _) = post_chat(
            &app,
            json!({"message": "more", "conversationHistory": history}),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        // Only the last six turns make it into the prompt
        let prompt = upstream.last_prompt();
        for i in 4..10 {
            assert!(prompt.contains(&format!("turn-{i}")));
        }
        for i in 0..4 {
            assert!(!prompt.contains(&format!("turn-{i}\n")));
        }
    }
}
