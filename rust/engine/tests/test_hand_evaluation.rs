use duelpoker_engine::cards::{Card, Rank as R, Suit as S};
use duelpoker_engine::deck::SUITS;
use duelpoker_engine::hand::{
    determine_winner, evaluate_hand, rank_for_score, HandRank, FLUSH_SCORE, HIGH_CARD_SCORE,
    PAIR_SCORE, THREE_OF_A_KIND_SCORE, TWO_PAIR_SCORE,
};
use duelpoker_engine::player::Player;

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn flush_needs_five_suited_cards_in_the_pool() {
    let hole = [c(S::Hearts, R::Two), c(S::Hearts, R::Nine)];
    let board = [
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Four),
    ];
    assert_eq!(evaluate_hand(&hole, &board, &SUITS), FLUSH_SCORE);
    assert_eq!(evaluate_hand(&hole, &board[..2], &SUITS), HIGH_CARD_SCORE);
}

#[test]
fn flush_takes_priority_over_pairs() {
    let hole = [c(S::Clubs, R::Ace), c(S::Clubs, R::King)];
    let board = [
        c(S::Clubs, R::Two),
        c(S::Clubs, R::Five),
        c(S::Clubs, R::Nine),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
    ];
    assert_eq!(evaluate_hand(&hole, &board, &SUITS), FLUSH_SCORE);
}

#[test]
fn trips_two_pair_pair_and_high_card() {
    let trips = [c(S::Clubs, R::Queen), c(S::Hearts, R::Queen)];
    let board = [
        c(S::Diamonds, R::Queen),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Seven),
    ];
    assert_eq!(evaluate_hand(&trips, &board, &SUITS), THREE_OF_A_KIND_SCORE);

    let two_pair = [c(S::Clubs, R::Ace), c(S::Hearts, R::Two)];
    let board = [
        c(S::Diamonds, R::Ace),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Seven),
    ];
    assert_eq!(evaluate_hand(&two_pair, &board, &SUITS), TWO_PAIR_SCORE);

    let pair = [c(S::Clubs, R::Five), c(S::Hearts, R::Five)];
    assert_eq!(evaluate_hand(&pair, &[], &SUITS), PAIR_SCORE);

    let high = [c(S::Clubs, R::Ace), c(S::Hearts, R::Ten)];
    let board = [
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Eight),
        c(S::Clubs, R::King),
    ];
    assert_eq!(evaluate_hand(&high, &board, &SUITS), HIGH_CARD_SCORE);
}

#[test]
fn full_house_scores_as_trips() {
    let hole = [c(S::Clubs, R::King), c(S::Diamonds, R::King)];
    let board = [
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
    ];
    assert_eq!(evaluate_hand(&hole, &board, &SUITS), THREE_OF_A_KIND_SCORE);
}

#[test]
fn label_ladder() {
    assert_eq!(rank_for_score(0.95), HandRank::RoyalFlush);
    assert_eq!(rank_for_score(FLUSH_SCORE), HandRank::Flush);
    assert_eq!(rank_for_score(0.75), HandRank::Straight);
    assert_eq!(rank_for_score(PAIR_SCORE), HandRank::Pair);
    assert_eq!(rank_for_score(THREE_OF_A_KIND_SCORE), HandRank::ThreeOfAKind);
    assert_eq!(rank_for_score(TWO_PAIR_SCORE), HandRank::TwoPair);
    assert_eq!(rank_for_score(HIGH_CARD_SCORE), HandRank::HighCard);
    assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
}

#[test]
fn a_pair_beats_trips_at_showdown() {
    let board = [
        c(S::Spades, R::Nine),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Jack),
        c(S::Clubs, R::Two),
        c(S::Hearts, R::Seven),
    ];
    let trips = Player::new(0, [c(S::Clubs, R::Nine), c(S::Diamonds, R::Nine)], 1000);
    let pair = Player::new(1, [c(S::Clubs, R::Ace), c(S::Diamonds, R::Ace)], 1000);

    let result = determine_winner(&[trips, pair], &board, &SUITS).expect("a winner");
    assert_eq!(result.player_id, 1);
    assert_eq!(result.rank, HandRank::Pair);
}

#[test]
fn ties_go_to_the_lowest_seat() {
    let board = [
        c(S::Spades, R::Three),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Jack),
        c(S::Clubs, R::Two),
        c(S::Hearts, R::Seven),
    ];
    let a = Player::new(0, [c(S::Clubs, R::Ace), c(S::Diamonds, R::Nine)], 1000);
    let b = Player::new(1, [c(S::Clubs, R::King), c(S::Diamonds, R::Ten)], 1000);
    let result = determine_winner(&[a, b], &board, &SUITS).unwrap();
    assert_eq!(result.player_id, 0);
    assert_eq!(result.rank, HandRank::HighCard);
}

#[test]
fn folded_players_are_not_contenders() {
    let board = [
        c(S::Spades, R::Three),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Jack),
    ];
    let mut strong = Player::new(0, [c(S::Clubs, R::Jack), c(S::Diamonds, R::Three)], 1000);
    strong.fold();
    let weak = Player::new(1, [c(S::Clubs, R::King), c(S::Diamonds, R::Ten)], 1000);

    let result = determine_winner(&[strong.clone(), weak], &board, &SUITS).unwrap();
    assert_eq!(result.player_id, 1);

    assert!(determine_winner(&[strong], &board, &SUITS).is_none());
}
