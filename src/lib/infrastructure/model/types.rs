//! Session types - configuration and error types

use reqwest::StatusCode;
use thiserror::Error;

/// Everything a session needs at creation time.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub id: String,
    pub endpoint: String,
    pub api_path: String,
    pub model: String,
    pub system_directive: String,
    pub api_key: Option<String>,
}

/// Session errors. Display strings are shown to the user as-is.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("provider '{provider}' requires an API key")]
    MissingApiKey { provider: String },
    #[error("failed to build HTTP client for '{provider}': {source}")]
    ClientBuild {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{message}")]
    Network { message: String },
    #[error("'{provider}' returned {status}: {message}")]
    Api {
        provider: String,
        status: StatusCode,
        message: String,
    },
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },
    #[error("provider '{provider}' returned invalid response: {reason}")]
    InvalidResponse { provider: String, reason: String },
    #[error("Chat session not initialized.")]
    NotInitialized,
}

impl ModelError {
    pub fn missing_api_key(provider: impl Into<String>) -> Self {
        Self::MissingApiKey {
            provider: provider.into(),
        }
    }

    pub fn client_build(provider: impl Into<String>, source: reqwest::Error) -> Self {
        Self::ClientBuild {
            provider: provider.into(),
            source,
        }
    }

    /// Transport failure with a message suitable for the transcript.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Map a reqwest failure into a short, user-facing message. The request
    /// URL is stripped so nothing from it reaches the transcript or the logs.
    pub fn from_reqwest(provider: &str, source: reqwest::Error) -> Self {
        let source = source.without_url();
        let message = if source.is_connect() {
            format!("could not connect to '{provider}'")
        } else if source.is_timeout() {
            format!("request to '{provider}' timed out")
        } else if source.is_decode() {
            return Self::invalid_response(provider, source.to_string());
        } else {
            format!("network error calling '{provider}': {source}")
        };
        Self::network(message)
    }

    pub fn api(provider: impl Into<String>, status: StatusCode, message: impl Into<String>) -> Self {
        Self::Api {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    pub fn invalid_response(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// True for failures that happen before any request is sent.
    pub fn is_init_error(&self) -> bool {
        matches!(
            self,
            ModelError::MissingApiKey { .. } | ModelError::ClientBuild { .. }
        )
    }
}
