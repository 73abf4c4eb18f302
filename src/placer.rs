//! Random fleet placement.
//!
//! Placement retries at two levels. Within one board every failed ship
//! position counts against a shared attempt budget; when the budget runs out
//! the board is abandoned with [`BoardError::PlacementFailed`]. The caller
//! then starts over on a fresh board, either forever ([`BoardPlacer::place`])
//! or up to a fixed number of boards ([`BoardPlacer::place_bounded`]).

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

#[derive(Debug, Clone)]
pub struct BoardPlacer {
    fleet: Vec<usize>,
    max_attempts: usize,
}

impl BoardPlacer {
    /// Placer for the standard fleet and attempt budget.
    pub fn new() -> Self {
        Self {
            fleet: FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Replace the ship lengths to place, in placement order.
    pub fn with_fleet(mut self, fleet: &[usize]) -> Self {
        self.fleet = fleet.to_vec();
        self
    }

    /// Attempt budget for a single board.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Try to pack the whole fleet onto one empty board. The board is
    /// finalized on success.
    pub fn try_place<const N: usize, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Board<N>, BoardError> {
        let mut board = Board::<N>::new();
        let mut attempts = 0;
        for &length in &self.fleet {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(BoardError::PlacementFailed {
                        attempts: self.max_attempts,
                    });
                }
                let ship = random_ship::<N, R>(rng, length)?;
                match board.add_ship(ship) {
                    Ok(()) => break,
                    Err(e) if e.is_retryable_placement() => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        board.finalize_placement();
        log::debug!(
            "placed {} ships in {} attempts",
            self.fleet.len(),
            attempts
        );
        Ok(board)
    }

    /// Keep starting over on fresh boards until one succeeds.
    pub fn place<const N: usize, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Board<N>, BoardError> {
        let mut boards = 0usize;
        loop {
            boards += 1;
            match self.try_place::<N, R>(rng) {
                Ok(board) => return Ok(board),
                Err(BoardError::PlacementFailed { attempts }) => {
                    log::debug!("board {} abandoned after {} attempts", boards, attempts);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Like [`place`](Self::place) but gives up after `max_boards` boards,
    /// returning the last placement failure.
    pub fn place_bounded<const N: usize, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_boards: usize,
    ) -> Result<Board<N>, BoardError> {
        let mut last = BoardError::PlacementFailed { attempts: 0 };
        for board_no in 1..=max_boards {
            match self.try_place::<N, R>(rng) {
                Ok(board) => return Ok(board),
                Err(e @ BoardError::PlacementFailed { .. }) => {
                    log::debug!("board {} abandoned: {}", board_no, e);
                    last = e;
                }
                Err(e) => return Err(e),
            }
        }
        log::warn!("no valid board after {} tries", max_boards);
        Err(last)
    }
}

impl Default for BoardPlacer {
    fn default() -> Self {
        Self::new()
    }
}

/// Bow sampled uniformly over the grid, orientation by coin flip.
fn random_ship<const N: usize, R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<Ship, BoardError> {
    let n = N as i32;
    let bow = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
    let orientation = if rng.random::<bool>() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}
