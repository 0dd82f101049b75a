//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Play against the minimax engine, or ask it to analyze a position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use strictly_tictactoe::{
    Board, Mark, ScoredMove, Shell, ShellConfig, find_best_move, rules, score_moves,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = match config {
                Some(path) => ShellConfig::from_file(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => ShellConfig::default(),
            };
            init_tracing(config.log_filter());
            run_play(config)
        }
        Command::Analyze { board, json } => {
            init_tracing(ShellConfig::default().log_filter());
            run_analyze(&board, json)
        }
    }
}

/// Installs the subscriber; `RUST_LOG` overrides the configured filter.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: ShellConfig) -> Result<()> {
    info!("Starting interactive game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
    let tally = shell.run()?;

    info!(games = tally.games(), "Exiting");
    Ok(())
}

/// Analysis output for `--json`.
#[derive(Debug, Serialize)]
struct Analysis {
    board: String,
    candidates: Vec<ScoredMove>,
    best: ScoredMove,
}

/// Score every computer reply for a position
#[instrument]
fn run_analyze(notation: &str, json: bool) -> Result<()> {
    let mut board = Board::from_notation(notation)?;

    let players = board.count(Mark::Player);
    let computers = board.count(Mark::Computer);
    if players != computers + 1 {
        bail!(
            "Not the computer's turn: {} player marks, {} computer marks",
            players,
            computers
        );
    }
    let state = rules::assess(&board);
    if state.is_terminal() {
        bail!("Nothing to analyze, the game is over: {}", state);
    }

    let candidates = score_moves(&mut board)?;
    let best = find_best_move(&mut board)?;

    if json {
        let analysis = Analysis {
            board: board.to_string(),
            candidates,
            best,
        };
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}\n", board);
        for candidate in &candidates {
            println!("{:>14}  {:+}", candidate.position.label(), candidate.score);
        }
        println!("\nBest: {} ({:+})", best.position, best.score);
    }

    Ok(())
}
