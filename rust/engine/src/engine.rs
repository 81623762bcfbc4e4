//! Game setup and stage progression.
//!
//! [`initialize_game`] builds the opening snapshot; [`progress_game`] closes a
//! finished betting round and either deals the next street or settles the pot.

use std::collections::BTreeMap;

use chrono::Utc;
use rand::Rng;

use crate::betting::refresh_human_deadline;
use crate::deck::{deal_cards, generate_deck, Deal, SUITS};
use crate::errors::GameError;
use crate::game::{GameState, Stage, TableConfig, WinningHand, WIN_BY_FOLD};
use crate::hand::determine_winner;
use crate::player::{Player, AI, HUMAN};

/// Shuffle, deal two hole cards to each seat and post the blinds.
///
/// The dealer (seat 0, the human) posts the small blind and acts first; the
/// AI posts the big blind and counts as the last raiser of the street.
///
/// # Errors
///
/// [`GameError::InvalidConfig`] when `config` fails validation.
///
/// # Examples
///
/// ```
/// use duelpoker_engine::engine::initialize_game;
/// use duelpoker_engine::game::{Stage, TableConfig};
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(42);
/// let state = initialize_game(&TableConfig::default(), &mut rng).unwrap();
/// assert_eq!(state.stage, Stage::Preflop);
/// assert_eq!(state.pot, 30);
/// assert_eq!(state.deck.len(), 48);
/// assert_eq!(state.total_chips(), 2000);
/// ```
pub fn initialize_game<R: Rng + ?Sized>(
    config: &TableConfig,
    rng: &mut R,
) -> Result<GameState, GameError> {
    config.validate()?;

    let deck = generate_deck(rng);
    let Deal { hands, remaining } = deal_cards(2, &deck)?;
    let mut players: Vec<Player> = hands
        .into_iter()
        .enumerate()
        .map(|(id, hand)| Player::new(id, hand, config.starting_chips))
        .collect();

    let dealer = HUMAN;
    let small_seat = dealer;
    let big_seat = (dealer + 1) % players.len();
    players[small_seat].bet(config.small_blind)?;
    players[big_seat].bet(config.big_blind)?;

    let mut round_bets = BTreeMap::new();
    round_bets.insert(small_seat, config.small_blind);
    round_bets.insert(big_seat, config.big_blind);

    let mut state = GameState {
        players,
        community_cards: Vec::with_capacity(5),
        pot: config.small_blind + config.big_blind,
        current_bet: config.big_blind,
        deck: remaining,
        stage: Stage::Preflop,
        dealer,
        small_blind: config.small_blind,
        big_blind: config.big_blind,
        turn_timeout_secs: config.turn_timeout_secs,
        current_player: small_seat,
        last_raise_player: Some(big_seat),
        round_bets,
        last_action: "Game started. Blinds posted.".to_string(),
        betting_round_complete: false,
        game_over: false,
        winning_hand: None,
        history: Vec::new(),
    };
    refresh_human_deadline(&mut state, Utc::now());

    tracing::info!(
        small_blind = state.small_blind,
        big_blind = state.big_blind,
        starting_chips = config.starting_chips,
        "game initialized"
    );
    Ok(state)
}

/// Advance a game whose betting round is complete.
///
/// If anyone folded, the other seat takes the pot immediately. Otherwise the
/// street's betting is reset and the next street is dealt off the top of the
/// deck; after the river the remaining hands are compared and the pot paid.
/// Finished games are returned unchanged.
///
/// # Errors
///
/// [`GameError::DeckExhausted`] when the deck cannot supply the next street.
pub fn progress_game(state: &GameState) -> Result<GameState, GameError> {
    if state.game_over {
        tracing::debug!("progress requested on a finished game");
        return Ok(state.clone());
    }
    if state.players.iter().any(Player::has_folded) {
        return Ok(finish_by_fold(state));
    }

    let mut next = state.clone();
    next.current_bet = 0;
    next.round_bets = BTreeMap::new();
    next.last_raise_player = None;
    next.current_player = HUMAN;
    next.betting_round_complete = false;

    match state.stage {
        Stage::Preflop => deal_street(&mut next, 3, Stage::Flop, "Dealing the flop")?,
        Stage::Flop => deal_street(&mut next, 1, Stage::Turn, "Dealing the turn")?,
        Stage::Turn => deal_street(&mut next, 1, Stage::River, "Dealing the river")?,
        Stage::River => {
            let Some(showdown) = determine_winner(&next.players, &next.community_cards, &SUITS)
            else {
                tracing::warn!("showdown reached with no active players");
                return Ok(state.clone());
            };
            let pot = next.pot;
            let winner = showdown.player_id;
            next.players[winner].add_chips(pot);
            next.stage = Stage::Showdown;
            next.winning_hand = Some(WinningHand {
                player_id: winner,
                rank: showdown.rank.to_string(),
            });
            next.last_action = format!(
                "{} wins ${} with {}!",
                next.players[winner].label(),
                pot,
                showdown.rank
            );
            next.game_over = true;
            next.pot = 0;
            tracing::info!(winner, pot, rank = %showdown.rank, "showdown settled");
        }
        Stage::Showdown => {
            tracing::warn!("progress requested at showdown on a live game");
            return Ok(state.clone());
        }
    }

    refresh_human_deadline(&mut next, Utc::now());
    Ok(next)
}

fn deal_street(
    state: &mut GameState,
    count: usize,
    stage: Stage,
    description: &str,
) -> Result<(), GameError> {
    let cards = state.deck.draw(count)?;
    state.community_cards.extend(cards);
    state.stage = stage;
    state.last_action = description.to_string();
    tracing::debug!(
        stage = stage.as_str(),
        board = state.community_cards.len(),
        deck = state.deck.len(),
        "street dealt"
    );
    Ok(())
}

fn finish_by_fold(state: &GameState) -> GameState {
    let winner = if state.players[HUMAN].has_folded() {
        AI
    } else {
        HUMAN
    };
    let pot = state.pot;

    let mut next = state.clone();
    next.players[winner].add_chips(pot);
    next.stage = Stage::Showdown;
    next.winning_hand = Some(WinningHand {
        player_id: winner,
        rank: WIN_BY_FOLD.to_string(),
    });
    next.last_action = format!(
        "{} wins ${} (opponent folded)",
        next.players[winner].label(),
        pot
    );
    next.game_over = true;
    next.betting_round_complete = true;
    next.pot = 0;

    tracing::info!(winner, pot, "hand won by fold");
    next
}
