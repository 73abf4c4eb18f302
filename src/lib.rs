#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placer;
pub mod player;
mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use placer::BoardPlacer;
pub use player::{take_turn, AiPlayer, Player, TurnReport};
#[cfg(feature = "std")]
pub use player::{cli::parse_coord, CliPlayer};
pub use ship::*;
