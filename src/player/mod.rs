//! Player trait and implementations
//!
//! A player only chooses targets and reacts to what happens on the boards;
//! validation and the retry-until-accepted loop live in [`take_turn`] so
//! every player type follows the same turn rules:
//! - AiPlayer: uniform random targeting
//! - CliPlayer: reads coordinates typed by a human

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::coordinate::Coordinate;

/// Interface implemented by different player types.
pub trait Player {
    /// Name used in messages and logs.
    fn name(&self) -> &str;

    /// Choose the next target on a board of `board_size`. The target may be
    /// off the board or already shot; the board rejects it in that case and
    /// the player is asked again.
    fn select_target(&mut self, board_size: usize) -> anyhow::Result<Coordinate>;

    /// Called at the start of every turn with the player's own board and the
    /// board it shoots at.
    fn show_boards(&mut self, _own: &Board, _enemy: &Board) {}

    /// Inform the player that the board refused its target.
    fn handle_rejected_target(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Called once when the match is decided.
    fn handle_match_end(&mut self, _won: bool) {}
}

/// What happened during one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets the board refused before this one was accepted.
    pub rejected: usize,
}

impl TurnReport {
    /// Whether the same player shoots again.
    pub fn repeat(&self) -> bool {
        self.outcome.grants_extra_turn()
    }
}

/// Ask `player` for targets until `enemy` accepts one. Off-board and
/// repeated targets do not use up the turn. Fails when no cell of `enemy`
/// is left to fire at.
pub fn take_turn<P: Player + ?Sized>(
    player: &mut P,
    enemy: &mut Board,
) -> anyhow::Result<TurnReport> {
    if enemy.is_exhausted() {
        anyhow::bail!("{} has no cell left to fire at", player.name());
    }
    let mut rejected = 0;
    loop {
        let target = player.select_target(enemy.size())?;
        match enemy.shoot(target) {
            Ok(outcome) => {
                log::info!("{} fires at {}: {:?}", player.name(), target, outcome);
                player.handle_shot_result(target, outcome);
                return Ok(TurnReport {
                    target,
                    outcome,
                    rejected,
                });
            }
            Err(e) if e.is_retryable_shot() => {
                rejected += 1;
                log::debug!("{} target {} rejected: {}", player.name(), target, e);
                player.handle_rejected_target(target, &e);
            }
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
    }
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
