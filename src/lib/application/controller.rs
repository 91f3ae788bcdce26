//! # Chat Controller
//!
//! Owns the conversation and the session handle and moves between two
//! phases:
//!
//! - `Idle` accepts a submission: the user turn is appended and a
//!   [`PendingReply`] is handed out.
//! - `Awaiting` rejects every submission until [`ChatController::complete`]
//!   receives the outcome of that reply.
//!
//! The pending reply can be awaited inline ([`ChatController::send`]) or
//! moved onto a task while the UI keeps drawing.

use crate::application::conversation::Conversation;
use crate::constants::{GREETING, INIT_FAILURE_BANNER};
use crate::model::{ChatSession, ModelError};
use crate::types::ChatMessage;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    Awaiting,
}

pub struct ChatController<S> {
    conversation: Conversation,
    phase: ChatPhase,
    error: Option<String>,
    init_error: Option<String>,
    session: Option<Arc<Mutex<S>>>,
    request_timeout: Option<Duration>,
}

impl<S> ChatController<S>
where
    S: ChatSession + 'static,
{
    /// Start from the outcome of session creation. A failed session still
    /// yields a usable controller; sends then fail with `NotInitialized`.
    pub fn new(init: Result<S, ModelError>, request_timeout: Option<Duration>) -> Self {
        let (session, init_error) = match init {
            Ok(session) => {
                info!(provider = session.id(), "Chat session ready");
                (Some(Arc::new(Mutex::new(session))), None)
            }
            Err(err) => {
                error!(error = %err, "Failed to initialize chat session");
                (None, Some(format!("{INIT_FAILURE_BANNER} ({err})")))
            }
        };

        Self {
            conversation: Conversation::with_greeting(GREETING),
            phase: ChatPhase::Idle,
            error: None,
            init_error,
            session,
            request_timeout,
        }
    }

    /// Accept `input` if idle and non-blank. Returns the reply to await.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply<S>> {
        if self.phase == ChatPhase::Awaiting {
            debug!("Submission ignored while a reply is pending");
            return None;
        }
        let prompt = input.trim();
        if prompt.is_empty() {
            return None;
        }

        self.conversation.push(ChatMessage::user(prompt));
        self.error = None;
        self.phase = ChatPhase::Awaiting;
        info!(chars = prompt.len(), "Dispatching user message");

        Some(PendingReply {
            prompt: prompt.to_string(),
            session: self.session.clone(),
            timeout: self.request_timeout,
        })
    }

    /// Apply the outcome of the pending reply and return to idle.
    pub fn complete(&mut self, outcome: Result<String, ModelError>) {
        if self.phase != ChatPhase::Awaiting {
            warn!("Reply outcome received with no pending request, dropping it");
            return;
        }

        match outcome {
            Ok(reply) => {
                debug!(chars = reply.len(), "Reply received");
                self.conversation.push(ChatMessage::model(reply));
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "Send failed");
                self.conversation.push(ChatMessage::model(format!(
                    "Sorry, I encountered an error: {message}"
                )));
                self.error = Some(message);
            }
        }
        self.phase = ChatPhase::Idle;
    }

    /// Submit and wait for the reply in place. Returns whether the input was accepted.
    pub async fn send(&mut self, input: &str) -> bool {
        let Some(pending) = self.submit(input) else {
            return false;
        };
        let outcome = pending.resolve().await;
        self.complete(outcome);
        true
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ChatPhase::Awaiting
    }

    /// Failure of the most recent send, cleared by the next submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Session creation failure; stays for the lifetime of the controller
    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }
}

/// A dispatched user turn waiting for the model.
pub struct PendingReply<S> {
    prompt: String,
    session: Option<Arc<Mutex<S>>>,
    timeout: Option<Duration>,
}

impl<S> PendingReply<S>
where
    S: ChatSession + 'static,
{
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub async fn resolve(self) -> Result<String, ModelError> {
        let Some(session) = self.session else {
            return Err(ModelError::NotInitialized);
        };
        let mut session = session.lock().await;

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, session.send(&self.prompt))
                .await
                .map_err(|_| ModelError::Timeout {
                    seconds: limit.as_secs(),
                })?,
            None => session.send(&self.prompt).await,
        }
    }
}
