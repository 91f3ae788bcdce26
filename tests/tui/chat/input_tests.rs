//! Input handling tests

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use skytech_tutor::tui::screens::chat::{ChatState, InputAction, handle_input};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn state_with(input: &str) -> ChatState {
    let mut state = ChatState::new();
    state.input = input.to_string();
    state.cursor_pos = input.chars().count();
    state
}

#[test]
fn test_insert_char() {
    let mut state = ChatState::new();

    state.insert_char('H');
    state.insert_char('i');

    assert_eq!(state.input, "Hi");
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_insert_char_after_multibyte() {
    let mut state = state_with("héap");
    state.cursor_pos = 2;

    state.insert_char('é');

    assert_eq!(state.input, "hééap");
    assert_eq!(state.cursor_pos, 3);
}

#[test]
fn test_delete_char() {
    let mut state = state_with("Hello");

    state.delete_char();

    assert_eq!(state.input, "Hell");
    assert_eq!(state.cursor_pos, 4);
}

#[test]
fn test_delete_char_at_start() {
    let mut state = state_with("Hello");
    state.cursor_pos = 0;

    state.delete_char();

    assert_eq!(state.input, "Hello");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_delete_multibyte_char() {
    let mut state = state_with("O(n²)");
    state.cursor_pos = 4;

    state.delete_char();

    assert_eq!(state.input, "O(n)");
    assert_eq!(state.cursor_pos, 3);
}

#[test]
fn test_delete_char_forward() {
    let mut state = state_with("Hello");
    state.cursor_pos = 0;

    state.delete_char_forward();

    assert_eq!(state.input, "ello");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_move_cursor_left_and_right() {
    let mut state = state_with("Hi");

    state.move_cursor_left();
    state.move_cursor_left();
    state.move_cursor_left();
    assert_eq!(state.cursor_pos, 0);

    state.move_cursor_right();
    state.move_cursor_right();
    state.move_cursor_right();
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_move_cursor_home_end() {
    let mut state = state_with("Hello World");
    state.cursor_pos = 5;

    state.move_cursor_home();
    assert_eq!(state.cursor_pos, 0);

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 11);
}

#[test]
fn test_typing_goes_into_buffer() {
    let mut state = ChatState::new();

    for c in "bfs".chars() {
        assert_eq!(handle_input(&mut state, key(KeyCode::Char(c)), false), InputAction::None);
    }

    assert_eq!(state.input, "bfs");
}

#[test]
fn test_enter_submits_non_blank_input() {
    let mut state = state_with("What is a BST?");

    let action = handle_input(&mut state, key(KeyCode::Enter), false);

    assert_eq!(action, InputAction::Submit);
    assert_eq!(state.input, "What is a BST?");
}

#[test]
fn test_enter_on_blank_input_does_nothing() {
    let mut state = state_with("   ");

    let action = handle_input(&mut state, key(KeyCode::Enter), false);

    assert_eq!(action, InputAction::None);
}

#[test]
fn test_shift_enter_inserts_newline() {
    let mut state = state_with("line one");

    let action = handle_input(
        &mut state,
        key_with(KeyCode::Enter, KeyModifiers::SHIFT),
        false,
    );

    assert_eq!(action, InputAction::None);
    assert_eq!(state.input, "line one\n");
}

#[test]
fn test_ctrl_j_inserts_newline() {
    let mut state = state_with("a");

    handle_input(
        &mut state,
        key_with(KeyCode::Char('j'), KeyModifiers::CONTROL),
        false,
    );

    assert_eq!(state.input, "a\n");
}

#[test]
fn test_esc_clears_input() {
    let mut state = state_with("draft");

    handle_input(&mut state, key(KeyCode::Esc), false);

    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_ctrl_q_exits() {
    let mut state = state_with("unsent");

    let action = handle_input(
        &mut state,
        key_with(KeyCode::Char('q'), KeyModifiers::CONTROL),
        false,
    );

    assert_eq!(action, InputAction::Exit);
}

#[test]
fn test_ctrl_c_clears_then_exits() {
    let mut state = state_with("draft");
    let ctrl_c = key_with(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert_eq!(handle_input(&mut state, ctrl_c.clone(), false), InputAction::None);
    assert!(state.input.is_empty());

    assert_eq!(handle_input(&mut state, ctrl_c, false), InputAction::Exit);
}

#[test]
fn test_plain_q_is_typed() {
    let mut state = ChatState::new();

    let action = handle_input(&mut state, key(KeyCode::Char('q')), false);

    assert_eq!(action, InputAction::None);
    assert_eq!(state.input, "q");
}

#[test]
fn test_scroll_keys() {
    let mut state = ChatState::new();

    assert_eq!(
        handle_input(&mut state, key(KeyCode::Up), false),
        InputAction::ScrollUp(1)
    );
    assert_eq!(
        handle_input(&mut state, key(KeyCode::PageDown), false),
        InputAction::ScrollDown(10)
    );
    assert_eq!(
        handle_input(
            &mut state,
            key_with(KeyCode::Char('u'), KeyModifiers::CONTROL),
            false
        ),
        InputAction::ScrollTop
    );
    assert_eq!(
        handle_input(
            &mut state,
            key_with(KeyCode::Char('d'), KeyModifiers::CONTROL),
            false
        ),
        InputAction::ScrollBottom
    );
}

#[test]
fn test_loading_freezes_buffer() {
    let mut state = state_with("next question");

    assert_eq!(
        handle_input(&mut state, key(KeyCode::Enter), true),
        InputAction::None
    );
    handle_input(&mut state, key(KeyCode::Char('x')), true);
    handle_input(&mut state, key(KeyCode::Backspace), true);
    handle_input(&mut state, Event::Paste("pasted".into()), true);

    assert_eq!(state.input, "next question");
}

#[test]
fn test_loading_still_scrolls_and_quits() {
    let mut state = ChatState::new();

    assert_eq!(
        handle_input(&mut state, key(KeyCode::PageUp), true),
        InputAction::ScrollUp(10)
    );
    assert_eq!(
        handle_input(
            &mut state,
            key_with(KeyCode::Char('q'), KeyModifiers::CONTROL),
            true
        ),
        InputAction::Exit
    );
}

#[test]
fn test_paste_inserts_text_without_carriage_returns() {
    let mut state = ChatState::new();

    handle_input(&mut state, Event::Paste("fn main() {\r\n}".into()), false);

    assert_eq!(state.input, "fn main() {\n}");
    assert_eq!(state.cursor_pos, 13);
}

#[test]
fn test_key_release_is_ignored() {
    let mut state = ChatState::new();
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;

    handle_input(&mut state, Event::Key(release), false);

    assert!(state.input.is_empty());
}
