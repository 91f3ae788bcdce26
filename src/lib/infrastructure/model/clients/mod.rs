//! Model client implementations

mod base;
mod gemini;

pub use base::HttpClientBase;
pub use gemini::{GeminiResponse, GeminiSession};
