//! Model infrastructure module
//!
//! # Structure
//! - `types` - Session configuration and error types
//! - `traits` - ChatSession trait
//! - `adapter` - Gemini payload adapter
//! - `factory` - Session creation from config and environment
//! - `clients` - HTTP client implementations

pub mod adapter;
pub mod clients;
pub mod factory;
pub mod traits;
pub mod types;

pub use clients::GeminiSession;
pub use factory::SessionFactory;
pub use traits::ChatSession;
pub use types::{ModelError, SessionConfig};
