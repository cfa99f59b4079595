//! Command-line interface for strictly_ladders.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Ladders - snakes and ladders in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_ladders")]
#[command(about = "Snakes and ladders for 2-4 players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (players, seed, roll timing)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Number of players (2-4)
        #[arg(short, long)]
        players: Option<u8>,

        /// Seed for reproducible dice
        #[arg(long)]
        seed: Option<u64>,

        /// File receiving log output (the terminal is taken by the UI)
        #[arg(long, default_value = "strictly_ladders.log")]
        log_file: PathBuf,
    },

    /// Play a whole game automatically and print every turn
    Headless {
        /// Number of players (2-4)
        #[arg(short, long)]
        players: Option<u8>,

        /// Seed for reproducible dice
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Run the rolling phase at configured speed instead of instantly
        #[arg(long)]
        realtime: bool,
    },
}
