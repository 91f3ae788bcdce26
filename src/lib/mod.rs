pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod render;
pub mod tui;

pub use application::{controller, conversation, stdio};
pub use cli::{Cli, RunMode};
pub use config::AppConfig;
pub use domain::types;
pub use infrastructure::model;

use application::controller::ChatController;
use infrastructure::model::SessionFactory;
use std::error::Error;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.mode, cli.log_file.as_deref())?;
    info!("Starting skytech");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        env_file = ?cli.env_file,
        "CLI arguments parsed"
    );

    config::ensure_env_loaded(cli.env_file.as_deref());
    let file_config = AppConfig::load(cli.config.as_deref())?;
    let app_config = apply_cli_overrides(&cli, file_config);
    debug!(
        model = %app_config.model,
        timeout = ?app_config.request_timeout,
        "Configuration resolved"
    );

    let session = SessionFactory::create(&app_config);
    let controller = ChatController::new(session, app_config.request_timeout);

    info!(mode = ?cli.mode, "Running tutor in selected mode");
    match cli.mode {
        RunMode::Tui => tui::run_chat(controller, app_config.model.clone()).await?,
        RunMode::Stdio => stdio::run(controller).await?,
    }
    info!("Tutor finished");
    Ok(())
}

/// The TUI owns the terminal, so it only logs when given a file.
fn init_tracing(mode: RunMode, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    static INIT: std::sync::Once = std::sync::Once::new();

    let writer = match log_file {
        Some(path) => Some(File::create(path)?),
        None => None,
    };

    INIT.call_once(|| {
        let filter = match (&writer, mode) {
            (None, RunMode::Tui) => EnvFilter::new("off"),
            _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        };
        let builder = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true);
        match writer {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
            None => builder.with_writer(std::io::stderr).init(),
        }
    });
    Ok(())
}

fn apply_cli_overrides(cli: &Cli, mut config: AppConfig) -> AppConfig {
    if let Some(model) = cli.model.as_deref().map(str::trim) {
        if model.is_empty() {
            warn!("Ignoring blank --model override");
        } else {
            info!(model, "Overriding model based on CLI flag");
            config = config.with_model(model);
        }
    }
    if let Some(secs) = cli.timeout {
        info!(secs, "Overriding request timeout based on CLI flag");
        config = config.with_request_timeout_secs(secs);
    }
    config
}
