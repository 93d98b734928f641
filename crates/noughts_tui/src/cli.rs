//! Command-line interface for the noughts TUI.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a rule-driven computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Which seat opens the game
    #[arg(long, value_enum, default_value = "random")]
    pub first: FirstMover,

    /// Seed for the first-mover coin flip (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// File to write logs to
    #[arg(long, default_value = "noughts_tui.log")]
    pub log_file: PathBuf,
}

/// How the opening seat is chosen.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstMover {
    /// The human opens every game
    Human,
    /// The computer opens every game
    Computer,
    /// Coin flip weighted two-to-one toward the computer
    Random,
}
