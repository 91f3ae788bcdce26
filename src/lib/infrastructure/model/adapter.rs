//! Message adapter - converts chat history into the Gemini request body

use crate::types::ChatMessage;
use serde_json::{Value, json};

pub struct MessageAdapter;

impl MessageAdapter {
    /// Convert turns to Gemini `contents`
    /// Returns: [{"role": "user"|"model", "parts": [{"text": "..."}]}]
    pub fn to_gemini_contents(messages: &[ChatMessage]) -> Vec<Value> {
        messages
            .iter()
            .map(|message| {
                json!({
                    "role": message.role().as_str(),
                    "parts": [{"text": message.text()}]
                })
            })
            .collect()
    }

    /// Build the full `generateContent` payload
    pub fn to_gemini_payload(system_directive: &str, messages: &[ChatMessage]) -> Value {
        let mut payload = json!({
            "contents": Self::to_gemini_contents(messages),
        });

        if !system_directive.trim().is_empty() {
            payload["system_instruction"] = json!({
                "parts": [{"text": system_directive}]
            });
        }

        payload
    }
}
