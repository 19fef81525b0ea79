//! LLM Client — the single point of entry for all generative-model calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! Interview logic depends on the `GenerationService` trait; `GeminiClient` is
//! the production implementation, injected through `AppState`.
//!
//! Model: gemini-1.5-flash (hardcoded)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for every generation call.
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One entry of prior conversation history in the generation service's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// History tags understood by the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// The generation boundary. Each call is one request/response exchange:
/// no retry, no timeout, no cancellation.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Multi-turn exchange: `system` seeds the conversation, `history` follows,
    /// and `input` is sent as the live message.
    async fn chat(
        &self,
        system: &str,
        history: &[ChatMessage],
        input: &str,
    ) -> Result<String, LlmError>;

    /// Single-shot completion of one prompt.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: ChatRole,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> Content<'a> {
    fn new(role: ChatRole, text: &'a str) -> Self {
        Self {
            role,
            parts: [Part { text }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn into_text(self) -> Result<String, LlmError> {
        if let Some(text) = self.text() {
            return Ok(text);
        }
        match self.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(LlmError::Blocked(reason)),
            None => Err(LlmError::EmptyContent),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// `GenerationService` backed by the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{MODEL}:generateContent", self.base_url)
    }

    /// Makes a single call to the Gemini API and returns the extracted text.
    async fn call(&self, contents: Vec<Content<'_>>) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest { contents };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        llm_response.into_text()
    }
}

/// Lays out a chat exchange: instruction as the opening user content, then the
/// prior history, then the live input.
fn chat_contents<'a>(
    system: &'a str,
    history: &'a [ChatMessage],
    input: &'a str,
) -> Vec<Content<'a>> {
    let mut contents = Vec::with_capacity(history.len() + 2);
    contents.push(Content::new(ChatRole::User, system));
    contents.extend(history.iter().map(|m| Content::new(m.role, &m.text)));
    contents.push(Content::new(ChatRole::User, input));
    contents
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn chat(
        &self,
        system: &str,
        history: &[ChatMessage],
        input: &str,
    ) -> Result<String, LlmError> {
        self.call(chat_contents(system, history, input)).await
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.call(vec![Content::new(ChatRole::User, prompt)]).await
    }
}
