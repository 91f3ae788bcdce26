//! Chat input handling

use super::state::ChatState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown
const PAGE_LINES: u16 = 10;

/// Input action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Exit the chat
    Exit,
    /// Scroll up by n lines
    ScrollUp(u16),
    /// Scroll down by n lines
    ScrollDown(u16),
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle a terminal event and update the input buffer.
///
/// While `loading` the buffer is frozen: only scrolling and quitting work.
pub fn handle_input(state: &mut ChatState, event: Event, loading: bool) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key, loading),
        Event::Paste(text) if !loading => {
            for c in text.chars().filter(|c| *c != '\r') {
                state.insert_char(c);
            }
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatState, key: KeyEvent, loading: bool) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    if ctrl && key.code == KeyCode::Char('c') {
        if state.input.is_empty() {
            return InputAction::Exit;
        }
        if !loading {
            state.clear_input();
        }
        return InputAction::None;
    }

    if let Some(action) = scroll_action(&key) {
        return action;
    }
    if loading {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter if is_newline_chord(&key) => {
            state.insert_newline();
            InputAction::None
        }
        KeyCode::Enter => {
            if state.input_is_blank() {
                InputAction::None
            } else {
                InputAction::Submit
            }
        }
        KeyCode::Char('j') if ctrl => {
            state.insert_newline();
            InputAction::None
        }
        KeyCode::Esc => {
            state.clear_input();
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Tab => {
            state.insert_char(' ');
            state.insert_char(' ');
            InputAction::None
        }
        KeyCode::Char(c) if !ctrl => {
            state.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn is_newline_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::SHIFT) || key.modifiers.contains(KeyModifiers::ALT)
}

fn scroll_action(key: &KeyEvent) -> Option<InputAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up => Some(InputAction::ScrollUp(1)),
        KeyCode::Down => Some(InputAction::ScrollDown(1)),
        KeyCode::PageUp => Some(InputAction::ScrollUp(PAGE_LINES)),
        KeyCode::PageDown => Some(InputAction::ScrollDown(PAGE_LINES)),
        KeyCode::Char('u') if ctrl => Some(InputAction::ScrollTop),
        KeyCode::Char('d') if ctrl => Some(InputAction::ScrollBottom),
        _ => None,
    }
}
