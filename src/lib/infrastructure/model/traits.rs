//! Session traits

use super::types::ModelError;
use async_trait::async_trait;

/// A stateful dialogue with a remote model.
///
/// Implementations remember earlier turns, so callers only pass the new
/// user text. `send` takes `&mut self`: one call at a time per session.
#[async_trait]
pub trait ChatSession: Send {
    /// Identifier used in logs and error messages
    fn id(&self) -> &str;

    /// Send one user turn and wait for the reply text
    async fn send(&mut self, text: &str) -> Result<String, ModelError>;
}
