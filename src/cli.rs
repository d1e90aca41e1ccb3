//! Command-line interface for s4d_timer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use s4d_timer::TimeFormat;

/// S4D timer - tabbed terminal stopwatch with group roster
#[derive(Parser, Debug)]
#[command(name = "s4d_timer")]
#[command(about = "Terminal stopwatch with roster and scoreboard tabs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI
    Run {
        /// Path to the TOML config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "s4d_timer.toml")]
        config: PathBuf,

        /// Override the tick period in milliseconds
        #[arg(long)]
        tick_ms: Option<u64>,
    },

    /// Start the timer, apply a number of ticks, stop, and print the elapsed time
    Simulate {
        /// Number of ticks to apply while running
        #[arg(short, long)]
        ticks: u64,

        /// Output format (stopwatch or clock)
        #[arg(short, long, default_value = "stopwatch")]
        format: TimeFormat,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Run {
            config: PathBuf::from("s4d_timer.toml"),
            tick_ms: None,
        }
    }
}
