use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "skytech",
    version,
    about = "SkyTech, a terminal tutor for data structures and algorithms"
)]
pub struct Cli {
    /// Configuration file (defaults to config/tutor.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Dotenv file holding the API key (defaults to config/.env)
    #[arg(long)]
    pub env_file: Option<PathBuf>,
    /// Override the configured model
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Request timeout in seconds, 0 disables it
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Write logs to this file (the TUI is silent otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Full-screen chat
    Tui,
    /// Line-oriented chat over stdin/stdout
    Stdio,
}
