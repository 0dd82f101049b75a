//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};

/// Strictly Tic-Tac-Toe - play against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal (you move first)
    Play {
        /// Path to a TOML shell config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Score every candidate reply for a board where the computer is to move
    Analyze {
        /// Board notation, row-major: X = player, O = computer, . = empty
        /// (e.g. "X.. .O. ..X")
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
