use crate::errors::GameError;
use crate::game::GameState;
use crate::player::HUMAN;

/// Whether the human may raise right now.
///
/// Raising is only offered while the human still owes chips this street and
/// holds more than that amount: never when already matched, never when a call
/// would put them all-in.
///
/// # Examples
///
/// ```
/// use duelpoker_engine::engine::initialize_game;
/// use duelpoker_engine::game::TableConfig;
/// use duelpoker_engine::rules::can_player_raise;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
/// let state = initialize_game(&TableConfig::default(), &mut rng).unwrap();
/// // small blind owes 10 more to match the big blind
/// assert!(can_player_raise(&state));
/// ```
pub fn can_player_raise(state: &GameState) -> bool {
    let to_call = state.to_call(HUMAN);
    state
        .players
        .get(HUMAN)
        .is_some_and(|human| to_call > 0 && human.chips() > to_call)
}

/// Checks that `player_id` may act on `state` at all.
///
/// # Errors
///
/// - [`GameError::GameOver`] once the hand has been decided
/// - [`GameError::NotPlayersTurn`] when another seat is due to act
/// - [`GameError::PlayerAlreadyFolded`] when the seat has folded
pub fn validate_turn(state: &GameState, player_id: usize) -> Result<(), GameError> {
    if state.game_over {
        return Err(GameError::GameOver);
    }
    if state.current_player != player_id {
        return Err(GameError::NotPlayersTurn {
            expected: state.current_player,
            actual: player_id,
        });
    }
    match state.players.get(player_id) {
        Some(p) if p.has_folded() => Err(GameError::PlayerAlreadyFolded(player_id)),
        Some(_) => Ok(()),
        None => Err(GameError::NotPlayersTurn {
            expected: state.current_player,
            actual: player_id,
        }),
    }
}

/// Validates a raise to the absolute street total `amount` and returns the
/// chips the raiser has to add.
///
/// # Errors
///
/// - [`GameError::InvalidRaiseAmount`] when `amount` does not exceed the current bet
/// - [`GameError::InsufficientChips`] when the raiser cannot cover the difference
///
/// # Examples
///
/// ```
/// use duelpoker_engine::engine::initialize_game;
/// use duelpoker_engine::errors::GameError;
/// use duelpoker_engine::game::TableConfig;
/// use duelpoker_engine::rules::validate_raise;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
/// let state = initialize_game(&TableConfig::default(), &mut rng).unwrap();
/// // seat 0 has 10 in, raising to 60 costs 50 more
/// assert_eq!(validate_raise(&state, 0, 60), Ok(50));
/// assert!(matches!(
///     validate_raise(&state, 0, 20),
///     Err(GameError::InvalidRaiseAmount { .. })
/// ));
/// ```
pub fn validate_raise(state: &GameState, player_id: usize, amount: u32) -> Result<u32, GameError> {
    if amount <= state.current_bet {
        return Err(GameError::InvalidRaiseAmount {
            amount,
            minimum: state.current_bet + 1,
        });
    }
    let delta = amount.saturating_sub(state.round_bet(player_id));
    let chips = state.players.get(player_id).map_or(0, |p| p.chips());
    if delta > chips {
        return Err(GameError::InsufficientChips);
    }
    Ok(delta)
}
