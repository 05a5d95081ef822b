use serde::{Deserialize, Serialize};

// Chat API request format
#[derive(Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

// One prior turn of the conversation
#[derive(Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub is_user: bool,
    pub text: String,
}

// Chat API response format
#[derive(Deserialize, Serialize, Clone)]
pub struct ChatResponse {
    pub response: String,
}

// Gemini generateContent request format
#[derive(Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct Part {
    pub text: String,
}

#[derive(Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

// Gemini generateContent response format
#[derive(Deserialize, Serialize, Clone, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct Candidate {
    pub content: Content,
}
