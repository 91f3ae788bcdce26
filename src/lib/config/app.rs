use super::defaults;
use super::error::ConfigError;
use std::path::Path;
use std::time::Duration;

/// Validated application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub model: String,
    pub endpoint: String,
    pub api_path: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub system_prompt: String,
    /// `None` means requests are never cut short
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: defaults::model(),
            endpoint: defaults::endpoint(),
            api_path: defaults::api_path(),
            api_key_env: defaults::api_key_env(),
            system_prompt: defaults::system_prompt(),
            request_timeout: defaults::request_timeout(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields [`AppConfig::default`];
    /// an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = defaults::timeout_from_secs(secs);
        self
    }
}
