use super::app::AppConfig;
use super::defaults;
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub api_path: Option<String>,
    pub api_key_env: Option<String>,
    pub system_prompt: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// Loads environment variables from `path` (default `config/.env`) once per process.
/// A missing file is not an error; variables may come from the real environment.
pub fn ensure_env_loaded(path: Option<&Path>) {
    ENV_LOADER.call_once(|| {
        let env_path = path.unwrap_or_else(|| Path::new(ENV_PATH));
        match from_filename(env_path) {
            Ok(_) => info!(path = %env_path.display(), "Loaded environment file"),
            Err(err) => debug!(path = %env_path.display(), %err, "No environment file loaded"),
        }
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { .. }) => {
                debug!(path = CONFIG_PATH, "No configuration file, using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_and_build(parsed)
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let model = non_empty("model", parsed.model, defaults::model)?;
    let endpoint = non_empty("endpoint", parsed.endpoint, defaults::endpoint)?;
    let api_path = non_empty("api_path", parsed.api_path, defaults::api_path)?;
    let api_key_env = non_empty("api_key_env", parsed.api_key_env, defaults::api_key_env)?;
    let system_prompt = parsed.system_prompt.unwrap_or_else(defaults::system_prompt);
    let request_timeout = match parsed.request_timeout_secs {
        Some(secs) => defaults::timeout_from_secs(secs),
        None => defaults::request_timeout(),
    };

    Ok(AppConfig {
        model,
        endpoint,
        api_path,
        api_key_env,
        system_prompt,
        request_timeout,
    })
}

fn non_empty(
    field: &'static str,
    value: Option<String>,
    fallback: fn() -> String,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyField { field }),
        Some(v) => Ok(v.trim().to_string()),
        None => Ok(fallback()),
    }
}
