//! Reply rendering
//!
//! Splits model replies into prose and fenced code segments. Both the TUI
//! bubbles and the STDIO printer consume the same segment list.

mod segment;

pub use segment::{Segment, plain_text, render_segments};
