//! Chat rendering tests

use async_trait::async_trait;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Alignment;
use ratatui::text::Line;
use skytech_tutor::controller::ChatController;
use skytech_tutor::model::{ChatSession, ModelError};
use skytech_tutor::tui::screens::chat::{ChatState, ChatUI, message_lines, wrapped_height};
use skytech_tutor::types::ChatMessage;

struct EchoSession;

#[async_trait]
impl ChatSession for EchoSession {
    fn id(&self) -> &str {
        "echo"
    }

    async fn send(&mut self, text: &str) -> Result<String, ModelError> {
        Ok(format!("echo: {text}"))
    }
}

fn texts(lines: &[Line]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

fn draw<S: ChatSession + 'static>(
    controller: &ChatController<S>,
    state: &mut ChatState,
    width: u16,
    height: u16,
) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| ChatUI::render(frame, state, controller, "gemini-test"))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..height {
        for x in 0..width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

#[test]
fn test_model_bubble_renders_code_block() {
    let message = ChatMessage::model("Use a stack:\n```rust\nlet mut s = Vec::new();\n```");

    let lines = texts(&message_lines(&message));

    assert!(lines[0].contains("SkyTech"));
    assert_eq!(lines[1], "Use a stack:");
    assert!(lines.iter().any(|l| l.trim() == "rust"));
    assert!(lines.contains(&"  let mut s = Vec::new();".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some(""));
}

#[test]
fn test_untagged_code_block_gets_generic_header() {
    let message = ChatMessage::model("```\nx = 1\n```");

    let lines = texts(&message_lines(&message));

    assert!(lines.iter().any(|l| l.trim() == "code"));
    assert!(lines.contains(&"  x = 1".to_string()));
}

#[test]
fn test_user_bubble_is_verbatim_and_right_aligned() {
    let message = ChatMessage::user("Show ```js\nnot code\n```");

    let lines = message_lines(&message);

    assert!(lines[0].to_string().contains("You"));
    assert_eq!(lines[1].to_string(), "Show ```js");
    assert_eq!(lines[2].to_string(), "not code");
    assert!(
        lines[..lines.len() - 1]
            .iter()
            .all(|l| l.alignment == Some(Alignment::Right))
    );
}

#[test]
fn test_model_bubble_is_left_aligned() {
    let lines = message_lines(&ChatMessage::model("Hello"));

    assert!(lines.iter().all(|l| l.alignment != Some(Alignment::Right)));
}

#[test]
fn test_wrapped_height_counts_wrapped_rows() {
    let lines = vec![Line::from("a".repeat(25)), Line::from(""), Line::from("abc")];

    assert_eq!(wrapped_height(&lines, 10), 3 + 1 + 1);
}

#[test]
fn test_wrapped_height_breaks_at_words() {
    let lines = vec![Line::from("aaaa bbbb cccc dddd")];

    assert_eq!(wrapped_height(&lines, 7), 4);
}

#[test]
fn test_render_shows_title_greeting_and_placeholder() {
    let controller = ChatController::new(Ok(EchoSession), None);
    let mut state = ChatState::new();

    let screen = draw(&controller, &mut state, 100, 24);

    assert!(screen.contains("SkyTech DSA Instructor"));
    assert!(screen.contains("gemini-test"));
    assert!(screen.contains("Ask me anything about Data Structures"));
    assert!(screen.contains("Ask about arrays"));
}

#[test]
fn test_render_shows_full_init_failure_banner_on_narrow_terminal() {
    let controller: ChatController<EchoSession> =
        ChatController::new(Err(ModelError::missing_api_key("gemini")), None);
    let mut state = ChatState::new();

    let screen = draw(&controller, &mut state, 80, 24);

    assert!(screen.contains("Failed to initialize the AI model"));
    assert!(screen.contains("requires an API key"));
}

#[test]
fn test_render_shows_send_error_banner() {
    let mut controller = ChatController::new(Ok(EchoSession), None);
    let _ = controller.submit("Explain tries");
    controller.complete(Err(ModelError::network("network unreachable")));
    let mut state = ChatState::new();

    let screen = draw(&controller, &mut state, 80, 24);

    assert!(
        screen
            .lines()
            .any(|row| row.contains("network unreachable") && !row.contains("Sorry"))
    );
    assert!(screen.contains("Sorry, I encountered an error"));
}

#[test]
fn test_render_while_awaiting_shows_thinking_indicator() {
    let mut controller = ChatController::new(Ok(EchoSession), None);
    let pending = controller.submit("What is a heap?");
    assert!(pending.is_some());
    let mut state = ChatState::new();

    let screen = draw(&controller, &mut state, 100, 24);

    assert!(screen.contains("What is a heap?"));
    assert!(screen.contains("SkyTech is thinking..."));
    assert!(screen.contains("Waiting for response..."));
}

#[test]
fn test_render_records_max_scroll_for_long_transcripts() {
    let mut controller = ChatController::new(Ok(EchoSession), None);
    for i in 0..15 {
        let _ = controller.submit(&format!("question {i}"));
        controller.complete(Ok(format!("answer {i}")));
    }
    let mut state = ChatState::new();

    let screen = draw(&controller, &mut state, 80, 20);

    assert!(state.max_scroll > 0);
    assert!(screen.contains("answer 14"));
    assert!(!screen.contains("answer 0"));
}

#[test]
fn test_bottom_pin_shows_end_of_word_wrapped_reply() {
    let mut controller = ChatController::new(Ok(EchoSession), None);
    let _ = controller.submit("Explain hashing");
    let reply = format!("{}\nLAST_LINE_MARKER", "aaaaaaa bbbbbbb ".repeat(20));
    controller.complete(Ok(reply));
    let mut state = ChatState::new();

    let screen = draw(&controller, &mut state, 22, 20);

    assert!(screen.contains("LAST_LINE_MARKER"), "{screen}");
}
