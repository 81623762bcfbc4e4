use std::collections::BTreeMap;

use duelpoker_engine::betting::{
    apply_action, handle_timeout, is_round_complete, player_call, player_fold, player_raise,
};
use duelpoker_engine::engine::initialize_game;
use duelpoker_engine::errors::GameError;
use duelpoker_engine::game::{GameState, TableConfig};
use duelpoker_engine::player::{PlayerAction, AI, HUMAN};
use duelpoker_engine::rules::{can_player_raise, validate_raise};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn fresh(seed: u64) -> GameState {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    initialize_game(&TableConfig::default(), &mut rng).expect("init")
}

fn with_bets(mut state: GameState, bets: &[(usize, u32)], current_bet: u32) -> GameState {
    state.round_bets = bets.iter().copied().collect::<BTreeMap<_, _>>();
    state.current_bet = current_bet;
    state
}

#[test]
fn blinds_are_posted_at_initialization() {
    let s = fresh(1);
    assert_eq!(s.players[HUMAN].chips(), 990);
    assert_eq!(s.players[AI].chips(), 980);
    assert_eq!(s.pot, 30);
    assert_eq!(s.current_bet, 20);
    assert_eq!(s.round_bet(HUMAN), 10);
    assert_eq!(s.round_bet(AI), 20);
    assert_eq!(s.current_player, HUMAN);
    assert_eq!(s.last_raise_player, Some(AI));
    assert_eq!(s.last_action, "Game started. Blinds posted.");
    assert!(s.players[HUMAN].timeout_at().is_some());
    assert!(s.players[AI].timeout_at().is_none());
    assert!(!is_round_complete(&s));
}

#[test]
fn round_complete_when_matched_and_back_to_seat_zero() {
    let s = with_bets(fresh(2), &[(0, 50), (1, 50)], 50);
    assert!(is_round_complete(&s));

    let mut ai_turn = s.clone();
    ai_turn.current_player = AI;
    assert!(!is_round_complete(&ai_turn));

    let unmatched = with_bets(fresh(2), &[(0, 20), (1, 50)], 50);
    assert!(!is_round_complete(&unmatched));
}

#[test]
fn round_complete_when_one_player_remains() {
    let mut s = fresh(3);
    s.players[AI].fold();
    s.current_player = AI;
    assert!(is_round_complete(&s));
}

#[test]
fn call_moves_owed_chips_into_the_pot() {
    let s = fresh(4);
    let next = player_call(&s);
    assert_eq!(next.players[HUMAN].chips(), 980);
    assert_eq!(next.pot, 40);
    assert_eq!(next.round_bet(HUMAN), 20);
    assert_eq!(next.current_player, AI);
    assert_eq!(next.last_action, "Player called $10");
    assert!(!next.betting_round_complete);
    assert_eq!(next.total_chips(), 2000);
    assert_eq!(next.history.len(), 1);
    assert_eq!(next.history[0].action, PlayerAction::Call);
    assert_eq!(next.history[0].chips, 10);

    // the input snapshot is untouched
    assert_eq!(s.pot, 30);

    let closed = apply_action(&next, AI, PlayerAction::Call).unwrap();
    assert_eq!(closed.last_action, "AI checked");
    assert_eq!(closed.pot, 40);
    assert!(closed.betting_round_complete);
}

#[test]
fn call_is_capped_at_the_stack() {
    let mut s = fresh(5);
    s.players[HUMAN].bet(985).unwrap();
    s.pot += 985;
    let next = player_call(&s);
    assert_eq!(next.players[HUMAN].chips(), 0);
    assert_eq!(next.round_bet(HUMAN), 15);
    assert_eq!(next.last_action, "Player called $5");
    assert_eq!(next.total_chips(), 2000);
}

#[test]
fn raise_sets_an_absolute_street_total() {
    let s = fresh(6);
    let next = player_raise(&s, 60);
    assert_eq!(next.players[HUMAN].chips(), 940);
    assert_eq!(next.pot, 80);
    assert_eq!(next.current_bet, 60);
    assert_eq!(next.round_bet(HUMAN), 60);
    assert_eq!(next.last_raise_player, Some(HUMAN));
    assert_eq!(next.current_player, AI);
    assert_eq!(next.last_action, "Player raised to $60");

    // AI calls the 40 it owes and the street closes
    let closed = apply_action(&next, AI, PlayerAction::Call).unwrap();
    assert_eq!(closed.last_action, "AI called $40");
    assert_eq!(closed.pot, 120);
    assert!(is_round_complete(&closed));
}

#[test]
fn raises_that_are_not_allowed_leave_state_unchanged() {
    let s = fresh(7);
    // not above the current bet
    assert_eq!(player_raise(&s, 20), s);
    // more than the stack covers
    assert_eq!(player_raise(&s, 5000), s);

    // nothing owed: raising is not offered
    let matched = with_bets(fresh(7), &[(0, 20), (1, 20)], 20);
    assert!(!can_player_raise(&matched));
    assert_eq!(player_raise(&matched, 100), matched);
}

#[test]
fn can_raise_requires_more_chips_than_owed() {
    let mut s = fresh(8);
    assert!(can_player_raise(&s));
    s.players[HUMAN].bet(980).unwrap();
    s.pot += 980;
    // 10 chips left, 10 owed
    assert!(!can_player_raise(&s));
}

#[test]
fn validate_raise_reports_reasons() {
    let s = fresh(9);
    assert_eq!(validate_raise(&s, HUMAN, 60), Ok(50));
    assert_eq!(
        validate_raise(&s, HUMAN, 20),
        Err(GameError::InvalidRaiseAmount {
            amount: 20,
            minimum: 21
        })
    );
    assert_eq!(
        validate_raise(&s, HUMAN, 1001),
        Err(GameError::InsufficientChips)
    );
}

#[test]
fn fold_marks_player_and_closes_round() {
    let s = fresh(10);
    let next = player_fold(&s);
    assert!(next.players[HUMAN].has_folded());
    assert_eq!(next.current_player, AI);
    assert_eq!(next.last_action, "Player folded");
    assert!(next.betting_round_complete);
    assert_eq!(next.pot, 30);
}

#[test]
fn out_of_turn_actions_are_no_ops() {
    let s = player_call(&fresh(11));
    assert_eq!(s.current_player, AI);
    assert_eq!(player_call(&s), s);
    assert_eq!(player_fold(&s), s);
    assert_eq!(
        apply_action(&s, HUMAN, PlayerAction::Call),
        Err(GameError::NotPlayersTurn {
            expected: AI,
            actual: HUMAN
        })
    );
}

#[test]
fn actions_after_game_over_are_rejected() {
    let mut s = fresh(12);
    s.game_over = true;
    assert_eq!(
        apply_action(&s, HUMAN, PlayerAction::Call),
        Err(GameError::GameOver)
    );
    assert_eq!(player_call(&s), s);
}

#[test]
fn timeout_auto_calls_and_passes_turn() {
    let s = fresh(13);
    let next = handle_timeout(&s);
    assert_eq!(next.players[HUMAN].chips(), 980);
    assert_eq!(next.pot, 40);
    assert_eq!(next.current_player, AI);
    assert_eq!(next.last_action, "Player timed out - Auto-called");

    // on the AI's turn a timeout does nothing
    assert_eq!(handle_timeout(&next), next);
}
