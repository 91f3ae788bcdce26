//! Session factory - creates the Gemini session from application config

use super::clients::GeminiSession;
use super::types::{ModelError, SessionConfig};
use crate::config::AppConfig;
use crate::constants::{FALLBACK_API_KEY_ENV, PROVIDER_ID};
use std::env;
use tracing::warn;

/// Resolve an API key from the first set, non-blank environment variable
pub fn resolve_api_key(provider: &str, vars: &[&str]) -> Option<String> {
    for var in vars.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        match env::var(var) {
            Ok(value) if !value.trim().is_empty() => return Some(value),
            Ok(_) => warn!(provider, env_var = var, "API key environment variable is empty"),
            Err(err) => warn!(
                provider,
                env_var = var,
                %err,
                "API key environment variable is not set"
            ),
        }
    }
    None
}

/// Builds session settings from config plus an already resolved key.
pub fn session_config(config: &AppConfig, api_key: Option<String>) -> SessionConfig {
    SessionConfig {
        id: PROVIDER_ID.to_string(),
        endpoint: config.endpoint.clone(),
        api_path: config.api_path.clone(),
        model: config.model.clone(),
        system_directive: config.system_prompt.clone(),
        api_key,
    }
}

pub struct SessionFactory;

impl SessionFactory {
    /// Read the key from the environment and open a session.
    pub fn create(config: &AppConfig) -> Result<GeminiSession, ModelError> {
        let api_key = resolve_api_key(
            PROVIDER_ID,
            &[config.api_key_env.as_str(), FALLBACK_API_KEY_ENV],
        );
        GeminiSession::initialize(session_config(config, api_key))
    }
}
