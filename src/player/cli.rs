#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::Player;
use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::coordinate::Coordinate;

const RULE: &str = "---------------------------";

/// Human player typing targets as two 1-indexed numbers, "row col".
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output sink, mostly so tests can inspect it.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args).and_then(|()| self.output.write_all(b"\n")) {
            log::warn!("failed to write to player output: {}", e);
        }
    }
}

/// Parse "row col" (1-indexed) into a 0-indexed coordinate. Range checks are
/// left to the board.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(format!(
            "expected two numbers, got {} value(s)",
            parts.len()
        ));
    };
    let row: i32 = row
        .parse()
        .map_err(|_| format!("'{}' is not a row number", row))?;
    let col: i32 = col
        .parse()
        .map_err(|_| format!("'{}' is not a column number", col))?;
    let row = row
        .checked_sub(1)
        .ok_or_else(|| format!("'{}' is out of range", row))?;
    let col = col
        .checked_sub(1)
        .ok_or_else(|| format!("'{}' is out of range", col))?;
    Ok(Coordinate::new(row, col))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        "You"
    }

    fn select_target(&mut self, _board_size: usize) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before a target was entered");
            }
            match parse_coord(&line) {
                Ok(target) => return Ok(target),
                Err(e) => self.say(format_args!("Invalid input: {}. Example: 3 4", e)),
            }
        }
    }

    fn show_boards(&mut self, own: &Board, enemy: &Board) {
        self.say(format_args!("\n{}\nYour board:\n{}", RULE, own));
        self.say(format_args!("Enemy board:\n{}\n{}", enemy, RULE));
    }

    fn handle_rejected_target(&mut self, _target: Coordinate, err: &BoardError) {
        match err {
            BoardError::OutOfBounds { .. } => {
                self.say(format_args!("That shot is off the board, try again!"))
            }
            BoardError::AlreadyTargeted { .. } => {
                self.say(format_args!("You already fired at that cell, try again!"))
            }
            other => self.say(format_args!("{}", other)),
        }
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.say(format_args!("{}: ship hit! Fire again.", target)),
            ShotOutcome::Sunk => self.say(format_args!("{}: ship sunk! Fire again.", target)),
            ShotOutcome::Miss => self.say(format_args!("{}: miss.", target)),
        }
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.say(format_args!("Computer fires at {}: your ship is hit!", target)),
            ShotOutcome::Sunk => self.say(format_args!("Computer fires at {}: your ship is sunk!", target)),
            ShotOutcome::Miss => self.say(format_args!("Computer fires at {}: miss.", target)),
        }
    }

    fn handle_match_end(&mut self, won: bool) {
        if won {
            self.say(format_args!("\nYou win! Every enemy ship is sunk."));
        } else {
            self.say(format_args!("\nThe computer wins. All your ships are sunk."));
        }
    }
}
