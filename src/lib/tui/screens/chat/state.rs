//! Chat screen state: input buffer, cursor, scroll and spinner

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Screen state owned by the event loop. The transcript itself lives in
/// the controller.
pub struct ChatState {
    /// Current input buffer, may span several lines
    pub input: String,
    /// Cursor position in input, in characters
    pub cursor_pos: usize,
    /// Scroll offset for messages; `u16::MAX` pins the view to the bottom
    pub scroll_offset: u16,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Largest useful scroll offset, recomputed on every render
    pub max_scroll: u16,
    /// Transcript length at the last render, used for auto-scroll
    pub seen_messages: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: u16::MAX,
            loading_frame: 0,
            max_scroll: 0,
            seen_messages: 0,
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.input, self.cursor_pos);
        self.input.insert(byte_pos, c);
        self.cursor_pos += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let byte_pos = char_to_byte_index(&self.input, self.cursor_pos);
            self.input.remove(byte_pos);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.char_count() {
            let byte_pos = char_to_byte_index(&self.input, self.cursor_pos);
            self.input.remove(byte_pos);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.char_count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_count();
    }

    /// True when the buffer holds only whitespace
    pub fn input_is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Number of lines the input box needs
    pub fn input_line_count(&self) -> usize {
        self.input.split('\n').count()
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Offset actually shown, with the bottom pin resolved
    pub fn effective_scroll(&self) -> u16 {
        self.scroll_offset.min(self.max_scroll)
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.effective_scroll().saturating_sub(lines);
    }

    /// Scroll messages down; reaching the end pins the view to the bottom again
    pub fn scroll_down(&mut self, lines: u16) {
        let next = self.effective_scroll().saturating_add(lines);
        self.scroll_offset = if next >= self.max_scroll { u16::MAX } else { next };
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Resolved against content height during render
        self.scroll_offset = u16::MAX;
    }

    /// Pin to the bottom whenever the transcript grew since the last call
    pub fn follow_transcript(&mut self, message_count: usize) {
        if message_count != self.seen_messages {
            self.seen_messages = message_count;
            self.scroll_to_bottom();
        }
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        self.loading_frame = (self.loading_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.loading_frame % SPINNER_FRAMES.len()]
    }
}

pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
