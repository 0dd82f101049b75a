//! Line-oriented terminal shell around the move engine.
//!
//! The shell is the presentation layer: it renders the board, turns typed
//! input into a cell and forwards it to [`Engine::submit`]. It is generic
//! over its input and output so tests can drive it without a terminal.

use crate::config::ShellConfig;
use crate::games::tictactoe::{BoardSnapshot, Cell, Engine, GameState, Mark, MoveError, Position};
use anyhow::Result;
use derive_getters::Getters;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Results of every finished game in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games the player won.
    player_wins: u32,
    /// Games the computer won.
    computer_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    /// Records a finished game. Unfinished states are ignored.
    pub fn record(&mut self, state: GameState) {
        match state {
            GameState::PlayerWins => self.player_wins += 1,
            GameState::ComputerWins => self.computer_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::InProgress => {}
        }
    }

    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.player_wins + self.computer_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {}, Computer {}, Draws {}",
            self.player_wins, self.computer_wins, self.draws
        )
    }
}

/// Renders a board with keypad numbers on empty cells.
pub fn render_board(snapshot: &BoardSnapshot, config: &ShellConfig) -> String {
    let mut out = String::new();
    for (row, cells) in snapshot.rows().iter().enumerate() {
        let symbols: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| match cell {
                Cell::Empty => (row * 3 + col + 1).to_string(),
                Cell::Occupied(Mark::Player) => config.player_symbol().to_string(),
                Cell::Occupied(Mark::Computer) => config.computer_symbol().to_string(),
            })
            .collect();
        out.push_str(&format!(" {} \n", symbols.join(" | ")));
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

/// Interactive session reading moves from `input` and writing to `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over the given streams.
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays games until the input ends or the user declines a rematch.
    ///
    /// Prints the session tally before returning it.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Tally> {
        let mut tally = Tally::default();

        while let Some(state) = self.play_game()? {
            tally.record(state);

            write!(self.output, "Play again? [y/N]: ")?;
            self.output.flush()?;
            let again = self
                .read_line()?
                .map(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
                .unwrap_or(false);
            if !again {
                break;
            }
        }

        writeln!(self.output, "Final score: {}", tally)?;
        info!(%tally, "Session finished");
        Ok(tally)
    }

    /// Plays one game.
    ///
    /// Returns the final state, or `None` if the user quit or the input
    /// ended first.
    ///
    /// # Errors
    ///
    /// I/O failures, and engine invariant violations. Rejected moves are
    /// reported to the user and never end the game.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<Option<GameState>> {
        let mut engine = Engine::new_game();

        loop {
            self.render(&engine.snapshot())?;
            write!(self.output, "Your move (1-9, q to quit): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input ended mid-game");
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit") {
                return Ok(None);
            }

            let Some(position) = Position::parse(line) else {
                writeln!(
                    self.output,
                    "Unrecognized cell {:?}. Use 1-9, row,col or a name like \"center\".",
                    line
                )?;
                continue;
            };

            match engine.submit(position) {
                Ok(report) => {
                    if let Some(reply) = report.computer_move() {
                        if *self.config.announce_computer_moves() {
                            writeln!(self.output, "Computer plays {}.", reply)?;
                        }
                    }
                    let state = *report.state();
                    if state.is_terminal() {
                        self.render(report.board())?;
                        writeln!(self.output, "{}", state)?;
                        return Ok(Some(state));
                    }
                }
                Err(MoveError::CellOccupied(taken)) => {
                    writeln!(self.output, "{} is already taken.", taken)?;
                }
                Err(e) if e.is_rejection() => {
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Consumes the shell, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn render(&mut self, snapshot: &BoardSnapshot) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(snapshot, &self.config))?;
        writeln!(self.output)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Board;

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&Board::new().snapshot(), &ShellConfig::default());
        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_render_custom_symbols() {
        let board = Board::from_notation("X.. .O. ...").unwrap();
        let config = ShellConfig::with_symbols('@', '#').unwrap();
        let rendered = render_board(&board.snapshot(), &config);
        assert!(rendered.starts_with(" @ | 2 | 3 \n"));
        assert!(rendered.contains(" 4 | # | 6 \n"));
    }

    #[test]
    fn test_tally_records_outcomes() {
        let mut tally = Tally::default();
        tally.record(GameState::Draw);
        tally.record(GameState::ComputerWins);
        tally.record(GameState::InProgress);
        assert_eq!(tally.games(), 2);
        assert_eq!(*tally.draws(), 1);
        assert_eq!(tally.to_string(), "Player 0, Computer 1, Draws 1");
    }
}
