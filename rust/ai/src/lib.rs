//! # duelpoker-ai: the house opponent
//!
//! Decides the AI seat's move from a [`GameState`] snapshot and applies it
//! after a short think delay.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`random`] - Threshold policy driven by one uniform draw per decision
//! - [`create_ai`] - Factory function for creating AI opponents
//! - [`ai_action`] - Async driver that waits, decides and applies the move
//!
//! ## Quick Start
//!
//! ```rust
//! use duelpoker_ai::{create_ai, AIOpponent};
//! use duelpoker_engine::betting::player_call;
//! use duelpoker_engine::engine::initialize_game;
//! use duelpoker_engine::game::TableConfig;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let state = initialize_game(&TableConfig::default(), &mut rng).expect("init");
//! let state = player_call(&state);
//!
//! let ai = create_ai("random").expect("known AI type");
//! let action = ai.decide(&state, &mut rng);
//! println!("{} chose {:?}", ai.name(), action);
//! ```

use std::time::Duration;

use duelpoker_engine::betting::apply_action;
use duelpoker_engine::game::GameState;
use duelpoker_engine::player::{PlayerAction, AI};
use rand::RngCore;
use thiserror::Error;

pub mod random;

#[cfg(test)]
mod test_rng;

/// Default pause before the AI acts.
pub const DEFAULT_THINK_TIME: Duration = Duration::from_millis(1000);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown AI type: {0}")]
    UnknownType(String),
}

/// Trait defining the interface for AI opponents.
///
/// # Example Implementation
///
/// ```rust
/// use duelpoker_ai::AIOpponent;
/// use duelpoker_engine::game::GameState;
/// use duelpoker_engine::player::PlayerAction;
/// use rand::RngCore;
///
/// struct AlwaysCall;
///
/// impl AIOpponent for AlwaysCall {
///     fn decide(&self, _state: &GameState, _rng: &mut dyn RngCore) -> PlayerAction {
///         PlayerAction::Call
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCall"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Choose the AI seat's next move. Implementations must not mutate the
    /// state; [`ai_action`] applies whatever they return.
    fn decide(&self, state: &GameState, rng: &mut dyn RngCore) -> PlayerAction;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

/// Factory function to create AI opponents by type string.
///
/// # Supported AI Types
///
/// - `"random"` - [`random::RandomAI`] with its default thresholds
///
/// # Example
///
/// ```rust
/// use duelpoker_ai::{create_ai, AiError};
///
/// let ai = create_ai("random").unwrap();
/// assert_eq!(ai.name(), "RandomAI");
/// assert!(matches!(create_ai("gto"), Err(AiError::UnknownType(_))));
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn AIOpponent>, AiError> {
    match ai_type {
        "random" => Ok(Box::new(random::RandomAI::default())),
        other => Err(AiError::UnknownType(other.to_string())),
    }
}

/// Wait `think_time`, then let `ai` act for the AI seat.
///
/// Returns the input unchanged when the game is over or it is not the AI's
/// turn. The decision is taken after the pause. A decision the engine
/// rejects is replaced by a call so the turn always passes back to seat 0.
pub async fn ai_action<R>(
    state: &GameState,
    ai: &dyn AIOpponent,
    rng: &mut R,
    think_time: Duration,
) -> GameState
where
    R: RngCore + Send,
{
    if state.game_over || state.current_player != AI {
        tracing::debug!(
            current_player = state.current_player,
            game_over = state.game_over,
            "ai_action skipped"
        );
        return state.clone();
    }

    if !think_time.is_zero() {
        tokio::time::sleep(think_time).await;
    }

    let decision = ai.decide(state, rng);
    tracing::debug!(ai = ai.name(), action = ?decision, "ai decided");
    match apply_action(state, AI, decision) {
        Ok(next) => next,
        Err(err) => {
            tracing::warn!(error = %err, action = ?decision, "ai decision rejected, calling instead");
            apply_action(state, AI, PlayerAction::Call).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ai fallback call rejected");
                state.clone()
            })
        }
    }
}
