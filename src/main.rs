//! Wordle Client - CLI entry point
//!
//! Connects to the game server, then hands control to the TUI.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_client::authority::{DEFAULT_SERVER, HttpAuthority};
use wordle_client::game::Difficulty;
use wordle_client::interactive::{App, run_tui};

/// Terminal client for a Wordle-style game evaluated by a remote server
#[derive(Parser, Debug)]
#[command(
    name = "wordle_client",
    about = "Terminal client for a Wordle-style word game with server-side evaluation",
    version
)]
struct Cli {
    /// Base URL of the game server
    #[arg(short, long, default_value = DEFAULT_SERVER)]
    server: String,

    /// Start immediately at this difficulty instead of showing the menu
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Append tracing output to this file (filtered via RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let authority =
        HttpAuthority::new(&cli.server).context("failed to construct the HTTP client")?;

    let mut app = App::new(authority);
    if let Some(difficulty) = cli.difficulty {
        app.start_with(difficulty);
    }

    run_tui(app)
}

/// Log to a file so the alternate screen stays clean
fn init_tracing(path: &Path) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}
