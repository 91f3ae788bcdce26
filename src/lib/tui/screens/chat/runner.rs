//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::application::controller::ChatController;
use crate::model::{ChatSession, ModelError};
use crate::tui::terminal::{Tui, init_terminal, install_panic_hook, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Run the TUI chat interface until the user quits
pub async fn run_chat<S>(
    mut controller: ChatController<S>,
    model: String,
) -> Result<(), Box<dyn Error>>
where
    S: ChatSession + 'static,
{
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new();

    let result = run_chat_loop(&mut terminal, &mut state, &mut controller, &model).await;

    restore_terminal()?;
    info!("Chat closed");
    result
}

/// Internal chat loop
async fn run_chat_loop<S>(
    terminal: &mut Tui,
    state: &mut ChatState,
    controller: &mut ChatController<S>,
    model: &str,
) -> Result<(), Box<dyn Error>>
where
    S: ChatSession + 'static,
{
    let (reply_tx, mut reply_rx) = mpsc::channel::<Result<String, ModelError>>(1);

    loop {
        while let Ok(outcome) = reply_rx.try_recv() {
            controller.complete(outcome);
        }
        state.follow_transcript(controller.conversation().len());

        terminal.draw(|frame| {
            ChatUI::render(frame, state, controller, model);
        })?;

        let timeout = if controller.is_loading() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            match handle_input(state, event, controller.is_loading()) {
                InputAction::Exit => return Ok(()),
                InputAction::Submit => {
                    if let Some(pending) = controller.submit(&state.input) {
                        state.clear_input();
                        let tx = reply_tx.clone();
                        tokio::spawn(async move {
                            let outcome = pending.resolve().await;
                            if tx.send(outcome).await.is_err() {
                                debug!("Chat closed before the reply arrived");
                            }
                        });
                    }
                }
                InputAction::ScrollUp(lines) => state.scroll_up(lines),
                InputAction::ScrollDown(lines) => state.scroll_down(lines),
                InputAction::ScrollTop => state.scroll_to_top(),
                InputAction::ScrollBottom => state.scroll_to_bottom(),
                InputAction::None => {}
            }
        } else if controller.is_loading() {
            state.tick_loading();
        }
    }
}
