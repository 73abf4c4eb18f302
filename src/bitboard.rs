//! A fixed-size bitboard keyed by [`Coordinate`], using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid
//! is packed into an unsigned integer `T`. The board uses two of these: one
//! for cells reserved during ship placement and one for cells already shot.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Coordinate lies outside [0..N) on either axis.
    IndexOutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A set of coordinates on an N×N grid stored in the unsigned integer `T`.
/// The caller guarantees N*N fits in `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether every cell of the grid is in the set.
    pub fn is_full(&self) -> bool {
        self.len() == N * N
    }

    /// Membership test. Coordinates off the grid are never members.
    pub fn contains(&self, at: Coordinate) -> bool {
        match Self::index(at) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds `at` to the set. Returns `true` if it was not already present.
    pub fn insert(&mut self, at: Coordinate) -> Result<bool, BitBoardError> {
        let idx = Self::index(at)?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    fn index(at: Coordinate) -> Result<usize, BitBoardError> {
        let n = N as i32;
        if at.row < 0 || at.col < 0 || at.row >= n || at.col >= n {
            return Err(BitBoardError::IndexOutOfBounds {
                row: at.row,
                col: at.col,
            });
        }
        Ok(at.row as usize * N + at.col as usize)
    }
}
