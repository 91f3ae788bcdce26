use crate::application::controller::ChatController;
use crate::constants::{APP_TITLE, ASSISTANT_NAME};
use crate::model::ChatSession;
use crate::render::{plain_text, render_segments};
use thiserror::Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StdioError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
}

enum LoopControl {
    Continue,
    Exit,
}

/// Line-oriented chat on stdin/stdout
pub async fn run<S>(mut controller: ChatController<S>) -> Result<(), StdioError>
where
    S: ChatSession + 'static,
{
    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    run_with(&mut controller, stdin, &mut stdout).await
}

/// Same loop over arbitrary streams
pub async fn run_with<S, R, W>(
    controller: &mut ChatController<S>,
    input: R,
    output: &mut W,
) -> Result<(), StdioError>
where
    S: ChatSession + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    print_banner(output).await?;
    if let Some(banner) = controller.init_error() {
        write_line(output, &format!("! {banner}")).await?;
    }
    if let Some(greeting) = controller.conversation().last() {
        print_reply(output, greeting.text()).await?;
    }

    loop {
        output.write_all(b"\nYou> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            write_line(output, "\nInput closed. Goodbye.").await?;
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.starts_with('/') {
            match handle_command(input, output).await? {
                LoopControl::Continue => continue,
                LoopControl::Exit => break,
            }
        }

        info!("Processing STDIO chat request");
        if !controller.send(input).await {
            continue;
        }
        if let Some(reply) = controller.conversation().last() {
            print_reply(output, reply.text()).await?;
        }
        if let Some(error) = controller.error() {
            debug!(%error, "Send failed in STDIO mode");
            write_line(output, &format!("! {error}")).await?;
        }
    }

    output.flush().await?;
    Ok(())
}

async fn handle_command<W>(input: &str, output: &mut W) -> Result<LoopControl, StdioError>
where
    W: AsyncWrite + Unpin,
{
    let name = input
        .trim_start_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    debug!(command = %name, "Processing STDIO command");

    match name.as_str() {
        "help" | "?" => {
            print_help(output).await?;
            Ok(LoopControl::Continue)
        }
        "exit" | "quit" | "q" => {
            write_line(output, "Goodbye.").await?;
            Ok(LoopControl::Exit)
        }
        other => {
            write_line(
                output,
                &format!("Unknown command '{other}'. Type /help for commands."),
            )
            .await?;
            Ok(LoopControl::Continue)
        }
    }
}

async fn print_banner<W: AsyncWrite + Unpin>(output: &mut W) -> Result<(), StdioError> {
    write_line(output, &format!("=== {APP_TITLE} ===")).await?;
    write_line(output, "Type /help for commands, /exit to quit.").await
}

async fn print_help<W: AsyncWrite + Unpin>(output: &mut W) -> Result<(), StdioError> {
    write_line(
        output,
        "Commands:\n  /help  - Show this help\n  /exit  - Leave the chat",
    )
    .await
}

async fn print_reply<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<(), StdioError> {
    write_line(output, &format!("\n{ASSISTANT_NAME}:")).await?;
    write_line(output, plain_text(&render_segments(text)).trim_end()).await
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<(), StdioError> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}
