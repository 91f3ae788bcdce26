pub mod app;
pub mod defaults;
pub mod error;
pub mod loader;

pub use crate::constants::CONFIG_PATH;
pub use app::AppConfig;
pub use error::ConfigError;
pub use loader::{ensure_env_loaded, parse_config};
