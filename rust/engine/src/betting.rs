//! Betting state machine for a single street.
//!
//! Every function here takes a snapshot and returns the next one. Actions
//! invoked out of turn (or that fail validation) leave the state unchanged and
//! are reported through `tracing` at warn level.

use chrono::{DateTime, Duration, Utc};

use crate::errors::GameError;
use crate::game::GameState;
use crate::logger::ActionRecord;
use crate::player::{PlayerAction, AI, HUMAN};
use crate::rules::{can_player_raise, validate_raise, validate_turn};

/// Apply `action` for `player_id` and pass the turn.
///
/// Calls are capped at the mover's stack. Raises name the absolute street
/// total the mover wants to reach, not the increment.
///
/// # Errors
///
/// Any error from [`validate_turn`] or [`validate_raise`]; the input
/// snapshot is untouched in that case.
pub fn apply_action(
    state: &GameState,
    player_id: usize,
    action: PlayerAction,
) -> Result<GameState, GameError> {
    validate_turn(state, player_id)?;

    let mut next = state.clone();
    let label = next.players[player_id].label();
    let (moved, description) = match action {
        PlayerAction::Call => {
            let to_call = next.to_call(player_id);
            let amount = to_call.min(next.players[player_id].chips());
            next.players[player_id].bet(amount)?;
            next.pot += amount;
            *next.round_bets.entry(player_id).or_insert(0) += amount;
            let description = if to_call == 0 {
                format!("{} checked", label)
            } else {
                format!("{} called ${}", label, amount)
            };
            (amount, description)
        }
        PlayerAction::Raise(amount) => {
            let delta = validate_raise(&next, player_id, amount)?;
            next.players[player_id].bet(delta)?;
            next.pot += delta;
            next.current_bet = amount;
            next.round_bets.insert(player_id, amount);
            next.last_raise_player = Some(player_id);
            (delta, format!("{} raised to ${}", label, amount))
        }
        PlayerAction::Fold => {
            next.players[player_id].fold();
            (0, format!("{} folded", label))
        }
    };

    next.current_player = next.next_seat(player_id);
    next.last_action = description;
    next.history.push(ActionRecord {
        player_id,
        stage: next.stage,
        action,
        chips: moved,
    });
    refresh_human_deadline(&mut next, Utc::now());
    next.betting_round_complete = is_round_complete(&next);

    tracing::debug!(
        player_id,
        action = ?action,
        chips = moved,
        pot = next.pot,
        current_bet = next.current_bet,
        "action applied"
    );
    Ok(next)
}

fn human_action(state: &GameState, action: PlayerAction) -> GameState {
    match apply_action(state, HUMAN, action) {
        Ok(next) => next,
        Err(err) => {
            tracing::warn!(error = %err, action = ?action, "human action ignored");
            state.clone()
        }
    }
}

/// Human calls (or checks when nothing is owed).
pub fn player_call(state: &GameState) -> GameState {
    human_action(state, PlayerAction::Call)
}

/// Human raises to the street total `amount`. Ignored unless
/// [`can_player_raise`] allows it and the human can cover the difference.
pub fn player_raise(state: &GameState, amount: u32) -> GameState {
    if !can_player_raise(state) {
        tracing::warn!(amount, "raise not allowed for human");
        return state.clone();
    }
    human_action(state, PlayerAction::Raise(amount))
}

/// Human folds. The hand ends on the next [`crate::engine::progress_game`].
pub fn player_fold(state: &GameState) -> GameState {
    human_action(state, PlayerAction::Fold)
}

/// Whether the current street's betting is closed.
///
/// True when a single player remains, or when every active player has matched
/// the current bet (or has no chips left to match it with) and the turn is
/// back with seat 0. The second rule assumes exactly two seats.
pub fn is_round_complete(state: &GameState) -> bool {
    let active: Vec<_> = state.active_players().collect();
    if active.len() <= 1 {
        return true;
    }
    let all_matched = active
        .iter()
        .all(|p| state.round_bet(p.id()) == state.current_bet || p.chips() == 0);
    all_matched && state.current_player == HUMAN
}

/// Auto-call on behalf of a human whose deadline passed, then hand the turn
/// to the AI. No-op unless it is the human's turn in a live game.
pub fn handle_timeout(state: &GameState) -> GameState {
    if state.game_over || state.current_player != HUMAN {
        tracing::debug!(
            current_player = state.current_player,
            "timeout ignored, not the human's turn"
        );
        return state.clone();
    }

    let mut next = if state.players[HUMAN].has_folded() {
        let mut next = state.clone();
        next.current_player = AI;
        next.betting_round_complete = is_round_complete(&next);
        next
    } else {
        match apply_action(state, HUMAN, PlayerAction::Call) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(error = %err, "auto-call on timeout failed");
                return state.clone();
            }
        }
    };
    next.last_action = "Player timed out - Auto-called".to_string();
    tracing::info!(pot = next.pot, "human turn timed out");
    next
}

/// Whether the human's turn deadline has passed at `now`.
pub fn is_turn_expired(state: &GameState, now: DateTime<Utc>) -> bool {
    !state.game_over
        && state.current_player == HUMAN
        && state.players[HUMAN]
            .timeout_at()
            .is_some_and(|deadline| now >= deadline)
}

/// Restart the human's clock whenever the turn lands on them.
pub(crate) fn refresh_human_deadline(state: &mut GameState, now: DateTime<Utc>) {
    if state.game_over || state.current_player != HUMAN {
        return;
    }
    let deadline = now + Duration::seconds(i64::from(state.turn_timeout_secs));
    state.players[HUMAN].set_timeout_at(Some(deadline));
}
