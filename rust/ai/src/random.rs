//! Threshold policy for the AI seat.
//!
//! One uniform draw `h` in `[0, 1)` per decision:
//! - `h > 0.7` and the AI was not the last raiser: raise to double the
//!   current bet, capped at the AI's stack
//! - `h > 0.3`: call (or check)
//! - otherwise: fold
//!
//! A capped raise that would not exceed the current bet is played as a call.

use duelpoker_engine::game::GameState;
use duelpoker_engine::player::{PlayerAction, AI};
use rand::{Rng, RngCore};

use crate::AIOpponent;

/// # Example
///
/// ```rust
/// use duelpoker_ai::random::RandomAI;
/// use duelpoker_ai::AIOpponent;
///
/// let ai = RandomAI::default();
/// assert_eq!(ai.name(), "RandomAI");
/// assert_eq!((ai.raise_above, ai.call_above), (0.7, 0.3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomAI {
    pub raise_above: f64,
    pub call_above: f64,
}

impl Default for RandomAI {
    fn default() -> Self {
        Self {
            raise_above: 0.7,
            call_above: 0.3,
        }
    }
}

impl RandomAI {
    /// Map a draw to an action for `state`.
    pub fn action_for(&self, state: &GameState, h: f64) -> PlayerAction {
        if h > self.raise_above && state.last_raise_player != Some(AI) {
            let stack = state.players.get(AI).map_or(0, |p| p.chips());
            let target = state.current_bet.saturating_mul(2).min(stack);
            if target > state.current_bet {
                return PlayerAction::Raise(target);
            }
            PlayerAction::Call
        } else if h > self.call_above {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }
}

impl AIOpponent for RandomAI {
    fn decide(&self, state: &GameState, rng: &mut dyn RngCore) -> PlayerAction {
        let h: f64 = rng.random();
        self.action_for(state, h)
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
