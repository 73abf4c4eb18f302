//! Game board: grid marks, placed ships and shot resolution.
//!
//! A board goes through two phases. While ships are being placed, the
//! `reserved` set holds every ship cell together with its one-cell buffer so
//! that no two ships ever touch, diagonals included. Once placement is
//! finalized that set is dropped and only `targeted` matters: the cells that
//! were shot at, plus the water revealed around sunk ships.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

type BB<const N: usize> = BitBoard<u128, N>;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Water next to a sunk ship, revealed without being shot.
    Contour,
}

impl Cell {
    fn marker(self, hidden: bool) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship if hidden => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
            Cell::Contour => '.',
        }
    }
}

/// Lifecycle of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    /// Ships may be added; shots are still accepted.
    Placement,
    /// Fleet is fixed.
    Battle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<const N: usize = BOARD_SIZE> {
    grid: [[Cell; N]; N],
    ships: Vec<Ship>,
    reserved: BB<N>,
    targeted: BB<N>,
    sunk: usize,
    hidden: bool,
    phase: BoardPhase,
}

impl<const N: usize> Board<N> {
    const FITS: () = assert!(N > 0 && N * N <= 128, "board does not fit a u128 bitboard");

    /// Create an empty, visible board in the placement phase.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        Board {
            grid: [[Cell::Empty; N]; N],
            ships: Vec::new(),
            reserved: BB::new(),
            targeted: BB::new(),
            sunk: 0,
            hidden: false,
            phase: BoardPhase::Placement,
        }
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    pub fn is_out_of_bounds(&self, at: Coordinate) -> bool {
        let n = N as i32;
        !(0..n).contains(&at.row) || !(0..n).contains(&at.col)
    }

    /// Grid state at `at`, or `None` off the board.
    pub fn cell(&self, at: Coordinate) -> Option<Cell> {
        if self.is_out_of_bounds(at) {
            return None;
        }
        Some(self.grid[at.row as usize][at.col as usize])
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when the board has ships and all of them are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide ship cells when rendering, for the opponent's view.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    /// Whether `at` was already shot or revealed.
    pub fn is_targeted(&self, at: Coordinate) -> bool {
        self.targeted.contains(at)
    }

    /// Whether every cell was shot or revealed, leaving nothing to fire at.
    pub fn is_exhausted(&self) -> bool {
        self.targeted.is_full()
    }

    /// Place `ship`, keeping a one-cell gap to every ship already placed.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.phase == BoardPhase::Battle {
            return Err(BoardError::PlacementClosed);
        }
        for at in ship.cells() {
            if self.is_out_of_bounds(at) {
                return Err(BoardError::ShipOutOfBounds);
            }
            if self.reserved.contains(at) {
                return Err(BoardError::ShipTooClose);
            }
        }
        for at in ship.cells() {
            self.set_cell(at, Cell::Ship);
            self.reserved.insert(at)?;
        }
        self.ships.push(ship);
        // buffer is tracked but not drawn while placing
        for at in ship.cells().flat_map(Coordinate::neighborhood) {
            if !self.is_out_of_bounds(at) {
                self.reserved.insert(at)?;
            }
        }
        Ok(())
    }

    /// End the placement phase. Ships and grid marks are kept; the
    /// placement buffer is discarded.
    pub fn finalize_placement(&mut self) {
        self.reserved.clear();
        self.phase = BoardPhase::Battle;
    }

    /// Resolve a shot at `at`. Rejected shots leave the board untouched.
    pub fn shoot(&mut self, at: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.is_out_of_bounds(at) {
            return Err(BoardError::OutOfBounds {
                row: at.row,
                col: at.col,
            });
        }
        if self.targeted.contains(at) {
            return Err(BoardError::AlreadyTargeted {
                row: at.row,
                col: at.col,
            });
        }
        self.targeted.insert(at)?;

        let Some(idx) = self.ships.iter().position(|s| s.is_hit_by(at)) else {
            self.set_cell(at, Cell::Miss);
            log::trace!("shot at {} missed", at);
            return Ok(ShotOutcome::Miss);
        };

        self.set_cell(at, Cell::Hit);
        if !self.ships[idx].take_hit() {
            log::trace!("shot at {} hit", at);
            return Ok(ShotOutcome::Hit);
        }

        self.sunk += 1;
        let ship = self.ships[idx];
        self.reveal_contour(&ship)?;
        log::debug!(
            "shot at {} sank a {}-cell ship ({} sunk)",
            at,
            ship.length(),
            self.sunk
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Marks the untouched water around a sunk ship; those cells can no
    /// longer be targeted.
    fn reveal_contour(&mut self, ship: &Ship) -> Result<(), BoardError> {
        for at in ship.cells().flat_map(Coordinate::neighborhood) {
            if self.is_out_of_bounds(at) || self.targeted.contains(at) {
                continue;
            }
            self.set_cell(at, Cell::Contour);
            self.targeted.insert(at)?;
        }
        Ok(())
    }

    fn set_cell(&mut self, at: Coordinate, cell: Cell) {
        self.grid[at.row as usize][at.col as usize] = cell;
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Text grid with 1-indexed labels. Ships are drawn as water on hidden
/// boards.
impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 1..=N {
            write!(f, " {} |", c)?;
        }
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for cell in row {
                write!(f, " {} |", cell.marker(self.hidden))?;
            }
        }
        Ok(())
    }
}
