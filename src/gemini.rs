use crate::error::AppError;
use crate::models::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

// Handle for the hosted model API. The key is optional so the server can
// start without one; generate() then fails closed before any network call.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(
        base_url: String,
        model: String,
        api_key: Option<String>,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            model,
            api_key,
            max_output_tokens,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn api_key_len(&self) -> usize {
        self.api_key.as_deref().map_or(0, str::len)
    }

    // One generateContent call with fixed sampling parameters. No retries.
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, key
        );

        let res = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("request failed: {e}")))?;

        if !res.status().is_success() {
            return Err(AppError::Upstream(format!(
                "upstream returned {}",
                res.status()
            )));
        }

        let parsed: GenerateContentResponse = res
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("parse error: {e}")))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.trim())
            .unwrap_or("");

        if text.is_empty() {
            return Err(AppError::EmptyResponse);
        }

        Ok(text.to_string())
    }
}
