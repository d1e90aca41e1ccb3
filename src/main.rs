//! S4D timer - tabbed terminal stopwatch.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use s4d_timer::{AppConfig, Command as TimerCommand, Session, Settings, TimeFormat};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Run { config, tick_ms } => run_tui(config, tick_ms).await,
        Command::Simulate { ticks, format } => run_simulation(ticks, format),
    }
}

/// Run the terminal UI
async fn run_tui(config_path: PathBuf, tick_ms: Option<u64>) -> Result<()> {
    let mut config = AppConfig::load_or_default(&config_path)?;
    if let Some(ms) = tick_ms {
        config = config.with_tick_interval_ms(ms)?;
    }

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(config_path = %config_path.display(), "Configuration resolved");
    s4d_timer::tui::run_tui(config).await
}

/// Run start → ticks → stop without a terminal UI
#[instrument]
fn run_simulation(ticks: u64, format: TimeFormat) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new(Settings {
        time_format: format,
    });
    session.dispatch(TimerCommand::Start);
    for _ in 0..ticks {
        session.dispatch(TimerCommand::Tick);
    }
    session.dispatch(TimerCommand::Stop);

    info!(ticks, "Simulation complete");
    println!("{}", session.elapsed_display());
    Ok(())
}
