//! Terminal user interface built on Ratatui

pub mod screens;
mod terminal;
pub mod theme;

pub use screens::run_chat;
pub use terminal::{Tui, restore_terminal};
