//! TUI chat screen
//!
//! - state.rs: input buffer, cursor and scroll
//! - ui.rs: rendering of the transcript, banners and input box
//! - input.rs: key handling
//! - runner.rs: event loop tying the controller to the terminal

mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use input::{InputAction, handle_input};
pub use runner::run_chat;
pub use state::{ChatState, SPINNER_FRAMES};
pub use ui::{ChatUI, message_lines, wrapped_height};
