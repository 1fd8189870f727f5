//! The player abstraction and the shared turn-resolution routine.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Coord, ShotOutcome};

/// Interface implemented by the player kinds.
///
/// A player only picks targets; the rules stay in the board. The notify
/// hooks let a player surface messages without the turn loop knowing
/// which side is human.
pub trait Player {
    /// Choose the next target coordinate.
    fn choose_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord>;

    /// Called with the outcome of the player's own accepted shot.
    fn notify_outcome(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    /// Called when the board rejected the player's shot.
    fn notify_rejected(&mut self, _coord: Coord, _err: &BoardError) {}
}

/// Run one move: ask `player` for targets until the enemy board accepts
/// one, reporting rejected shots back to the player.
///
/// Out-of-bounds and repeated targets are expected during normal play and
/// re-prompt; anything else propagates.
pub fn play_turn(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    enemy: &mut Board,
) -> anyhow::Result<ShotOutcome> {
    loop {
        let target = player.choose_target(rng)?;
        match enemy.resolve_shot(target) {
            Ok(outcome) => {
                player.notify_outcome(target, outcome);
                return Ok(outcome);
            }
            Err(err @ (BoardError::OutOfBounds { .. } | BoardError::AlreadyTargeted { .. })) => {
                player.notify_rejected(target, &err);
            }
            Err(err) => return Err(anyhow::anyhow!(err)),
        }
    }
}
