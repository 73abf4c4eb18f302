//! Ship geometry and lives.

use crate::common::BoardError;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Extends to the right of the bow.
    Horizontal,
    /// Extends downwards from the bow.
    Vertical,
}

impl Orientation {
    /// Maps the numeric code (0 = horizontal, 1 = vertical).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Orientation::Horizontal),
            1 => Some(Orientation::Vertical),
            _ => None,
        }
    }

    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight ship anchored at its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// Build a ship of `length` cells starting at `bow`. The ship is not
    /// checked against any board here.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        Ok(Ship {
            bow,
            length,
            orientation,
            lives: length,
        })
    }

    /// Cells covered by the ship, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Whether a shot at `at` lands on this ship.
    pub fn is_hit_by(&self, at: Coordinate) -> bool {
        self.cells().any(|c| c == at)
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged cells left.
    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    /// Takes one life. Returns `true` if this hit sank the ship.
    pub(crate) fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}
