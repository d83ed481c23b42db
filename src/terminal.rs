//! Line-oriented terminal front end.

use crate::board_input::{Input, cell_number, parse_input};
use crate::session::GameSession;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, instrument};

const HELP: &str = "Enter a cell number, `row col` (zero-based), `r` to restart or `q` to quit.";

/// Plays a [`GameSession`] over any reader/writer pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    think_delay: Duration,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal that pauses `think_delay` before each computer move.
    pub fn new(input: R, output: W, think_delay: Duration) -> Self {
        Self {
            input,
            output,
            think_delay,
        }
    }

    /// Runs until the player quits or input ends.
    #[instrument(skip_all)]
    pub fn run(&mut self, session: &mut GameSession) -> Result<()> {
        writeln!(self.output, "{HELP}")?;
        self.render(session)?;

        loop {
            if session.is_computer_turn() {
                if !self.think_delay.is_zero() {
                    std::thread::sleep(self.think_delay);
                }
                match session.computer_move()? {
                    Some(position) => {
                        let cell = cell_number(position, session.state().size());
                        writeln!(self.output, "Computer plays {cell}")?;
                        self.render(session)?;
                    }
                    None => break,
                }
                continue;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match parse_input(&line, session.state().size()) {
                Some(Input::Quit) => break,
                Some(Input::Restart) => {
                    session.restart();
                    self.render(session)?;
                }
                Some(Input::Place(position)) => match session.human_move(position) {
                    Ok(_) => self.render(session)?,
                    Err(err) => writeln!(self.output, "{err}")?,
                },
                None => writeln!(self.output, "{HELP}")?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Hands back the writer, mainly so tests can inspect the transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    fn render(&mut self, session: &GameSession) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", session.state().board().display())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", session.status_message())?;
        if let Some(line) = session.winning_line() {
            let size = session.state().size();
            let cells: Vec<_> = line.iter().map(|&pos| cell_number(pos, size).to_string()).collect();
            writeln!(self.output, "Winning line: {}", cells.join(" "))?;
        }
        if session.state().is_over() {
            writeln!(self.output, "Type `r` to play again or `q` to quit.")?;
        }
        Ok(())
    }
}
