//! Common types: board errors and shot outcomes.

use crate::bitboard::BitBoardError;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// Shot hit a ship that still has lives left.
    Hit,
    /// Shot hit open water.
    Miss,
    /// Shot took the last life of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Hits and sinkings let the attacker shoot again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by Board and placement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (index off the grid).
    BitBoardError(BitBoardError),
    /// Shot target lies outside the grid.
    OutOfBounds { row: i32, col: i32 },
    /// Shot target was already shot, or revealed around a sunk ship.
    AlreadyTargeted { row: i32, col: i32 },
    /// Ships must be at least one cell long.
    InvalidShipLength,
    /// A ship cell falls outside the grid.
    ShipOutOfBounds,
    /// A ship cell overlaps or touches another ship.
    ShipTooClose,
    /// Ships cannot be added once placement is finalized.
    PlacementClosed,
    /// The placer ran out of attempts for this board.
    PlacementFailed { attempts: usize },
}

impl BoardError {
    /// Target errors a player recovers from by picking another cell.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds { .. } | BoardError::AlreadyTargeted { .. }
        )
    }

    /// Placement errors the placer recovers from by trying another spot.
    pub fn is_retryable_placement(&self) -> bool {
        matches!(self, BoardError::ShipOutOfBounds | BoardError::ShipTooClose)
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Shot at {} {} is off the board", row + 1, col + 1)
            }
            BoardError::AlreadyTargeted { row, col } => {
                write!(f, "Cell {} {} was already targeted", row + 1, col + 1)
            }
            BoardError::InvalidShipLength => write!(f, "Ship length must be at least 1"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTooClose => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::PlacementClosed => write!(f, "Ship placement is already finalized"),
            BoardError::PlacementFailed { attempts } => {
                write!(f, "Unable to place fleet after {} attempts", attempts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
