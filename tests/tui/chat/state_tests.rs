//! ChatState tests

use skytech_tutor::tui::screens::chat::{ChatState, SPINNER_FRAMES};

#[test]
fn test_chat_state_new() {
    let state = ChatState::new();

    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.scroll_offset, u16::MAX);
    assert_eq!(state.loading_frame, 0);
}

#[test]
fn test_input_is_blank() {
    let mut state = ChatState::new();
    assert!(state.input_is_blank());

    state.input = "  \n\t ".to_string();
    assert!(state.input_is_blank());

    state.input = " a ".to_string();
    assert!(!state.input_is_blank());
}

#[test]
fn test_input_line_count() {
    let mut state = ChatState::new();
    assert_eq!(state.input_line_count(), 1);

    state.insert_char('a');
    state.insert_newline();
    state.insert_char('b');
    state.insert_newline();

    assert_eq!(state.input, "a\nb\n");
    assert_eq!(state.input_line_count(), 3);
}

#[test]
fn test_effective_scroll_resolves_bottom_pin() {
    let mut state = ChatState::new();
    state.max_scroll = 12;

    assert_eq!(state.effective_scroll(), 12);

    state.scroll_offset = 3;
    assert_eq!(state.effective_scroll(), 3);
}

#[test]
fn test_scroll_up_from_bottom() {
    let mut state = ChatState::new();
    state.max_scroll = 20;

    state.scroll_up(5);

    assert_eq!(state.scroll_offset, 15);
}

#[test]
fn test_scroll_up_at_zero() {
    let mut state = ChatState::new();
    state.max_scroll = 20;
    state.scroll_offset = 0;

    state.scroll_up(1);

    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_scroll_down_stops_before_end() {
    let mut state = ChatState::new();
    state.max_scroll = 20;
    state.scroll_offset = 5;

    state.scroll_down(10);

    assert_eq!(state.scroll_offset, 15);
}

#[test]
fn test_scroll_down_to_end_pins_bottom() {
    let mut state = ChatState::new();
    state.max_scroll = 20;
    state.scroll_offset = 15;

    state.scroll_down(10);

    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let mut state = ChatState::new();
    state.max_scroll = 8;

    state.scroll_to_top();
    assert_eq!(state.effective_scroll(), 0);

    state.scroll_to_bottom();
    assert_eq!(state.scroll_offset, u16::MAX);
    assert_eq!(state.effective_scroll(), 8);
}

#[test]
fn test_follow_transcript_pins_only_on_growth() {
    let mut state = ChatState::new();
    state.max_scroll = 30;

    state.follow_transcript(1);
    state.scroll_to_top();

    state.follow_transcript(1);
    assert_eq!(state.scroll_offset, 0);

    state.follow_transcript(2);
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_tick_loading_wraps() {
    let mut state = ChatState::new();

    for _ in 0..SPINNER_FRAMES.len() {
        state.tick_loading();
    }

    assert_eq!(state.loading_frame, 0);
    assert_eq!(state.spinner(), SPINNER_FRAMES[0]);
}
