//! Chat UI rendering components

use super::state::ChatState;
use crate::application::controller::ChatController;
use crate::constants::{APP_TITLE, ASSISTANT_NAME, INPUT_PLACEHOLDER};
use crate::model::ChatSession;
use crate::render::{Segment, render_segments};
use crate::tui::theme;
use crate::types::{ChatMessage, MessageRole};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Tallest the input box grows before it stops expanding
const MAX_INPUT_LINES: usize = 6;

/// Banner rows kept clear of the transcript on narrow terminals
const MAX_BANNER_ROWS: usize = 6;

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render<S>(
        frame: &mut Frame,
        state: &mut ChatState,
        controller: &ChatController<S>,
        model: &str,
    ) where
        S: ChatSession + 'static,
    {
        let area = frame.area();
        let banners = Paragraph::new(banner_lines(controller))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let banner_height = banners.line_count(area.width).min(MAX_BANNER_ROWS) as u16;
        let input_height = state.input_line_count().min(MAX_INPUT_LINES) as u16 + 2;

        // Layout: Header, Messages, Banners, Input, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(banner_height),
                Constraint::Length(input_height),
                Constraint::Length(1),
            ])
            .split(area);

        Self::render_header(frame, chunks[0], model);
        Self::render_messages(frame, chunks[1], state, controller);
        frame.render_widget(banners, chunks[2]);
        Self::render_input(frame, chunks[3], state, controller.is_loading());
        Self::render_help_bar(frame, chunks[4], controller.is_loading());
    }

    fn render_header(frame: &mut Frame, area: Rect, model: &str) {
        let header = Line::from(vec![
            Span::styled(format!("◆ {APP_TITLE}"), theme::title()),
            Span::styled(format!("  {model}"), theme::footer()),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());

        let para = Paragraph::new(header)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(para, area);
    }

    /// Render messages area
    fn render_messages<S>(
        frame: &mut Frame,
        area: Rect,
        state: &mut ChatState,
        controller: &ChatController<S>,
    ) where
        S: ChatSession + 'static,
    {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height as usize;

        let mut lines: Vec<Line<'static>> = controller
            .conversation()
            .iter()
            .flat_map(message_lines)
            .collect();

        if controller.is_loading() {
            lines.push(Line::from(Span::styled(
                format!("{} {ASSISTANT_NAME} is thinking...", state.spinner()),
                theme::loading(),
            )));
        }

        let para = transcript(lines);
        let total_rows = para.line_count(inner_width);
        state.max_scroll = total_rows.saturating_sub(inner_height).min(u16::MAX as usize) as u16;
        let scroll = state.effective_scroll();

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());

        let para = para.block(block).scroll((scroll, 0));

        frame.render_widget(para, area);
    }

    /// Render input area
    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState, loading: bool) {
        let lines: Vec<Line> = if loading {
            vec![Line::from(Span::styled(
                "Waiting for response...",
                theme::placeholder(),
            ))]
        } else if state.input.is_empty() {
            vec![Line::from(vec![
                Span::styled("▏", theme::border_active()),
                Span::styled(INPUT_PLACEHOLDER, theme::placeholder()),
            ])]
        } else {
            input_with_cursor(&state.input, state.cursor_pos)
                .split('\n')
                .map(|line| Line::from(Span::styled(line.to_string(), theme::text())))
                .collect()
        };

        // Keep the cursor line visible once the box stops growing
        let cursor_line = state
            .input
            .chars()
            .take(state.cursor_pos)
            .filter(|c| *c == '\n')
            .count();
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = cursor_line.saturating_sub(visible.saturating_sub(1)) as u16;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if loading {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(" Message ");

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect, loading: bool) {
        let help_text = if loading {
            Line::from(Span::styled(
                format!(" {ASSISTANT_NAME} is thinking... PageUp/Down to scroll, Ctrl+Q to quit "),
                theme::loading(),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::raw(": Send │ "),
                Span::styled("Shift+Enter", theme::key_hint()),
                Span::raw(": New line │ "),
                Span::styled("PageUp/Down", theme::key_hint()),
                Span::raw(": Scroll │ "),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::raw(": Exit "),
            ])
        };

        frame.render_widget(Paragraph::new(help_text).style(theme::footer()), area);
    }
}

/// Lines for one chat bubble, followed by a blank separator line.
///
/// Model bubbles are left-aligned and rendered through the reply segmenter;
/// user bubbles are right-aligned and shown verbatim.
pub fn message_lines(message: &ChatMessage) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match message.role() {
        MessageRole::Model => {
            lines.push(Line::from(Span::styled(
                format!("◆ {ASSISTANT_NAME}"),
                theme::model_label(),
            )));
            for segment in render_segments(message.text()) {
                match &segment {
                    Segment::Text(text) => {
                        lines.extend(
                            text.split('\n')
                                .map(|l| Line::from(Span::styled(l.to_string(), theme::text()))),
                        );
                    }
                    Segment::Code { content, .. } => {
                        let label = segment.language_label().unwrap_or("code");
                        lines.push(Line::from(Span::styled(
                            format!(" {label} "),
                            theme::code_header(),
                        )));
                        lines.extend(content.split('\n').map(|l| {
                            Line::from(Span::styled(format!("  {l}"), theme::code()))
                        }));
                    }
                }
            }
        }
        MessageRole::User => {
            lines.push(
                Line::from(Span::styled("You ●", theme::user_label())).alignment(Alignment::Right),
            );
            lines.extend(message.text().split('\n').map(|l| {
                Line::from(Span::styled(l.to_string(), theme::user_text()))
                    .alignment(Alignment::Right)
            }));
        }
    }

    lines.push(Line::from(""));
    lines
}

/// Rows the lines occupy once word-wrapped to `width` columns, exactly as
/// the transcript draws them
pub fn wrapped_height(lines: &[Line], width: u16) -> usize {
    transcript(lines.to_vec()).line_count(width)
}

fn transcript(lines: Vec<Line<'_>>) -> Paragraph<'_> {
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn input_with_cursor(input: &str, cursor_pos: usize) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    if cursor_pos >= chars.len() {
        chars.push('▏');
    } else {
        chars.insert(cursor_pos, '▏');
    }
    chars.into_iter().collect()
}

fn banner_lines<S>(controller: &ChatController<S>) -> Vec<Line<'static>>
where
    S: ChatSession + 'static,
{
    controller
        .init_error()
        .into_iter()
        .chain(controller.error())
        .map(|text| Line::from(Span::styled(text.to_string(), theme::error())))
        .collect()
}
