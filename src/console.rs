//! Line-based console game loop.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use tracing::debug;

use crate::game::{GameSession, Piece};
use crate::render::render_board;

pub struct Console<R, W> {
    session: GameSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: GameSession, input: R, output: W) -> Self {
        Console {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main game loop.
    ///
    /// Returns the winning piece, or `None` if input ran out first.
    pub fn run(&mut self) -> io::Result<Option<Piece>> {
        writeln!(self.output, "Welcome to Connect 4!")?;
        self.print_board()?;

        loop {
            let piece = self.session.current_piece();
            writeln!(self.output, "Player {piece}'s turn (Piece = {piece})")?;

            let Some(line) = self.prompt()? else {
                return Ok(None);
            };

            // Out-of-range numbers are still numbers; clamp so they are
            // reported as an invalid column
            let column = match line.trim().parse::<i64>() {
                Ok(column) => column,
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => i64::MIN,
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };

            match self.session.play(column) {
                Ok(turn) => {
                    self.print_board()?;
                    if turn.won {
                        writeln!(self.output, "Player {} wins! Congratulations!", turn.piece)?;
                        return Ok(Some(turn.piece));
                    }
                }
                Err(err) => {
                    debug!(column, error = %err, "move rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Ask for a column; `None` on end of input
    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(
            self.output,
            "Select a column (1-{}): ",
            self.session.board().columns()
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_board(&mut self) -> io::Result<()> {
        write!(self.output, "{}", render_board(self.session.board()))
    }
}
