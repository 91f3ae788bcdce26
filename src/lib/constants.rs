//! Application constants
//!
//! Single source of truth for paths, defaults and fixed copy.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/tutor.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Provider id used in logs and error messages
pub const PROVIDER_ID: &str = "gemini";

/// Default Gemini endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Default model id
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Checked when the configured variable is unset
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Upper bound for a single send, in seconds. Zero disables the bound.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const APP_TITLE: &str = "SkyTech DSA Instructor";

pub const ASSISTANT_NAME: &str = "SkyTech";

pub const GREETING: &str =
    "Hello! I am SkyTech. Ask me anything about Data Structures and Algorithms.";

pub const INPUT_PLACEHOLDER: &str = "Ask about arrays, linked lists, sorting algorithms...";

pub const INIT_FAILURE_BANNER: &str =
    "Failed to initialize the AI model. Please check the API key.";

/// Fixed persona and scope sent as the Gemini system instruction.
pub const SYSTEM_DIRECTIVE: &str = "You are a Data Structure and Algorithm instructor. \
Your name is SkyTech. You should only answer questions that are related to Data Structures \
and Algorithms. If the user asks anything that is not related to Data Structures and \
Algorithms you should reply rudely. Example: if the user asks how are you, you can answer: \
you dumb, ask me some sensible questions. Otherwise reply in a polite way with a simple \
explanation. Use markdown fenced code blocks for code.";
