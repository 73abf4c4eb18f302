//! Match controller: alternates turns between two players and decides the
//! winner.

use alloc::boxed::Box;
use alloc::string::String;
use rand::Rng;

use crate::{
    board::Board,
    common::BoardError,
    config::WIN_THRESHOLD,
    placer::BoardPlacer,
    player::{take_turn, Player, TurnReport},
};

/// One of the two seats in a match. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won(Side),
}

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchReport {
    pub winner: Side,
    pub winner_name: String,
    /// Accepted shots by both sides.
    pub turns: usize,
    /// Accepted shots per side, indexed like [`Side`].
    pub shots: [usize; 2],
    /// Ships each side has sunk.
    pub sunk: [usize; 2],
}

/// Outcome of [`MatchController::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    Continue(TurnReport),
    Finished(MatchReport),
}

struct Contender {
    player: Box<dyn Player>,
    board: Board,
    shots: usize,
}

/// Runs a match between two players, each defending its own board.
pub struct MatchController {
    sides: [Contender; 2],
    turn: usize,
    win_threshold: usize,
    report: Option<MatchReport>,
}

impl MatchController {
    /// Match between two players on boards that are already placed.
    pub fn new(
        first: Box<dyn Player>,
        first_board: Board,
        second: Box<dyn Player>,
        second_board: Board,
    ) -> Self {
        let contender = |player, board| Contender {
            player,
            board,
            shots: 0,
        };
        Self {
            sides: [
                contender(first, first_board),
                contender(second, second_board),
            ],
            turn: 0,
            win_threshold: WIN_THRESHOLD,
            report: None,
        }
    }

    /// Match on two independently placed standard fleets.
    pub fn with_random_boards<R: Rng + ?Sized>(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let placer = BoardPlacer::new();
        let first_board: Board = placer.place(rng)?;
        let second_board: Board = placer.place(rng)?;
        Ok(Self::new(first, first_board, second, second_board))
    }

    /// Number of sunk ships that ends the match. A board with fewer ships
    /// is beaten once all of them are sunk.
    pub fn with_win_threshold(mut self, threshold: usize) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Board defended by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.sides[side.index()].board
    }

    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.sides[side.index()].board
    }

    /// Side whose turn it is.
    pub fn active_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Shots accepted so far from `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.sides[side.index()].shots
    }

    pub fn status(&self) -> MatchStatus {
        let [first, second] = &self.sides;
        if self.is_beaten(&second.board) {
            MatchStatus::Won(Side::First)
        } else if self.is_beaten(&first.board) {
            MatchStatus::Won(Side::Second)
        } else {
            MatchStatus::InProgress
        }
    }

    /// Play one accepted shot. A hit or a sinking keeps the turn with the
    /// same side; a miss hands it over.
    pub fn step(&mut self) -> anyhow::Result<StepResult> {
        if let Some(report) = &self.report {
            return Ok(StepResult::Finished(report.clone()));
        }
        if let MatchStatus::Won(winner) = self.status() {
            return Ok(StepResult::Finished(self.finish(winner)));
        }

        let side = self.active_side();
        let [first, second] = &mut self.sides;
        first.player.show_boards(&first.board, &second.board);
        second.player.show_boards(&second.board, &first.board);

        let (attacker, defender) = match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };
        let turn = take_turn(attacker.player.as_mut(), &mut defender.board)?;
        attacker.shots += 1;
        defender
            .player
            .handle_opponent_shot(turn.target, turn.outcome);

        if !turn.repeat() {
            self.turn += 1;
        }

        match self.status() {
            MatchStatus::InProgress => Ok(StepResult::Continue(turn)),
            MatchStatus::Won(winner) => Ok(StepResult::Finished(self.finish(winner))),
        }
    }

    /// Play until one side has lost its fleet.
    pub fn run(&mut self) -> anyhow::Result<MatchReport> {
        loop {
            if let StepResult::Finished(report) = self.step()? {
                return Ok(report);
            }
        }
    }

    fn is_beaten(&self, board: &Board) -> bool {
        let threshold = self.win_threshold.min(board.ships().len()).max(1);
        board.sunk_count() >= threshold
    }

    fn finish(&mut self, winner: Side) -> MatchReport {
        let [first, second] = &mut self.sides;
        first.player.show_boards(&first.board, &second.board);
        second.player.show_boards(&second.board, &first.board);
        first.player.handle_match_end(winner == Side::First);
        second.player.handle_match_end(winner == Side::Second);

        let report = MatchReport {
            winner,
            winner_name: String::from(self.sides[winner.index()].player.name()),
            turns: self.sides[0].shots + self.sides[1].shots,
            shots: [self.sides[0].shots, self.sides[1].shots],
            sunk: [
                self.sides[1].board.sunk_count(),
                self.sides[0].board.sunk_count(),
            ],
        };
        log::info!(
            "{} wins after {} shots",
            report.winner_name,
            report.turns
        );
        self.report = Some(report.clone());
        report
    }
}
