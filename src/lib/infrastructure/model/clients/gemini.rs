//! Gemini chat session

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::traits::ChatSession;
use crate::infrastructure::model::types::{ModelError, SessionConfig};
use crate::types::ChatMessage;

/// Multi-turn Gemini conversation. History lives here and is replayed on
/// every request.
pub struct GeminiSession {
    base: HttpClientBase,
    api_path: String,
    model: String,
    system_directive: String,
    history: Vec<ChatMessage>,
}

impl GeminiSession {
    pub fn initialize(config: SessionConfig) -> Result<Self, ModelError> {
        let base = HttpClientBase::new(config.id, config.endpoint, config.api_key)?;
        info!(
            provider = base.id.as_str(),
            model = config.model.as_str(),
            "Gemini session created"
        );
        Ok(Self {
            base,
            api_path: config.api_path,
            model: config.model,
            system_directive: config.system_directive,
            history: Vec::new(),
        })
    }

    /// Turns acknowledged by the remote side so far
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn build_model_url(&self) -> String {
        let path = format!(
            "{}/{}:generateContent",
            self.api_path.trim_matches('/'),
            self.model
        );
        self.base.build_url(&path)
    }
}

#[async_trait]
impl ChatSession for GeminiSession {
    fn id(&self) -> &str {
        &self.base.id
    }

    async fn send(&mut self, text: &str) -> Result<String, ModelError> {
        let url = self.build_model_url();
        let mut turns = self.history.clone();
        turns.push(ChatMessage::user(text));
        let payload = MessageAdapter::to_gemini_payload(&self.system_directive, &turns);

        info!(
            provider = self.base.id.as_str(),
            model = self.model.as_str(),
            turns = turns.len(),
            "Sending request to Gemini"
        );

        let response: GeminiResponse = self.base.post_with_key_header(&url, &payload).await?;
        let reply = response.into_text(&self.base.id)?;
        debug!(chars = reply.len(), "Received response from Gemini");

        turns.push(ChatMessage::model(reply.clone()));
        self.history = turns;
        Ok(reply)
    }
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

impl GeminiResponse {
    /// Concatenate the text parts of the first candidate.
    pub fn into_text(self, provider: &str) -> Result<String, ModelError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ModelError::invalid_response(
                provider,
                format!("prompt blocked ({reason})"),
            ));
        }

        let candidate = self
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::invalid_response(provider, "no candidates"))?;

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .map(|r| format!("missing text (finish reason {r})"))
                .unwrap_or_else(|| "missing text".to_string());
            return Err(ModelError::invalid_response(provider, reason));
        }
        Ok(text)
    }
}
