use crate::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_REQUEST_TIMEOUT_SECS, SYSTEM_DIRECTIVE,
};
use std::time::Duration;

pub fn model() -> String {
    DEFAULT_MODEL.to_string()
}

pub fn endpoint() -> String {
    DEFAULT_GEMINI_ENDPOINT.to_string()
}

pub fn api_path() -> String {
    DEFAULT_GEMINI_API_PATH.to_string()
}

pub fn api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

pub fn system_prompt() -> String {
    SYSTEM_DIRECTIVE.to_string()
}

pub fn request_timeout() -> Option<Duration> {
    timeout_from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
}

pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
