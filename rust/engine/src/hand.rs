//! Coarse hand scoring used at showdown.
//!
//! A rough heuristic, not poker hand ranking. Hole cards
//! and board are one pool, categories are checked in a fixed order, and the
//! label ladder does not mirror the scoring order: a pair (0.6) outranks
//! three of a kind (0.5).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::player::Player;

pub const FLUSH_SCORE: f64 = 0.8;
pub const THREE_OF_A_KIND_SCORE: f64 = 0.5;
pub const TWO_PAIR_SCORE: f64 = 0.4;
pub const PAIR_SCORE: f64 = 0.6;
pub const HIGH_CARD_SCORE: f64 = 0.3;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandRank {
    RoyalFlush,
    Flush,
    Straight,
    Pair,
    ThreeOfAKind,
    TwoPair,
    HighCard,
}

impl HandRank {
    pub fn label(self) -> &'static str {
        match self {
            HandRank::RoyalFlush => "Royal Flush",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::Pair => "Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::TwoPair => "Two Pair",
            HandRank::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a score onto the label ladder.
pub fn rank_for_score(score: f64) -> HandRank {
    if score >= 0.9 {
        HandRank::RoyalFlush
    } else if score >= 0.8 {
        HandRank::Flush
    } else if score >= 0.7 {
        HandRank::Straight
    } else if score >= 0.6 {
        HandRank::Pair
    } else if score >= 0.5 {
        HandRank::ThreeOfAKind
    } else if score >= 0.4 {
        HandRank::TwoPair
    } else {
        HandRank::HighCard
    }
}

/// Score `hole` + `board` as a single pool. `suits` is the deck's suit table.
///
/// # Examples
///
/// ```
/// use duelpoker_engine::cards::{Card, Rank, Suit};
/// use duelpoker_engine::deck::SUITS;
/// use duelpoker_engine::hand::{evaluate_hand, PAIR_SCORE};
///
/// let hole = [Card::new(Rank::Nine, Suit::Clubs), Card::new(Rank::Nine, Suit::Hearts)];
/// assert_eq!(evaluate_hand(&hole, &[], &SUITS), PAIR_SCORE);
/// ```
pub fn evaluate_hand(hole: &[Card], board: &[Card], suits: &[Suit]) -> f64 {
    let pool: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();

    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in &pool {
        rank_counts[c.value() as usize] += 1;
    }

    let has_flush = pool.len() >= 5
        && suits
            .iter()
            .any(|&s| pool.iter().filter(|c| c.suit == s).count() >= 5);
    let has_trips = rank_counts.iter().any(|&n| n >= 3);
    let paired_ranks = rank_counts.iter().filter(|&&n| n >= 2).count();

    if has_flush {
        FLUSH_SCORE
    } else if has_trips {
        THREE_OF_A_KIND_SCORE
    } else if paired_ranks >= 2 {
        TWO_PAIR_SCORE
    } else if paired_ranks == 1 {
        PAIR_SCORE
    } else {
        HIGH_CARD_SCORE
    }
}

/// Showdown result for the winning seat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Showdown {
    pub player_id: usize,
    pub score: f64,
    pub rank: HandRank,
}

/// Pick the winner among players who have not folded.
///
/// Only a strictly greater score replaces the current best, so ties go to
/// the lowest seat. Returns `None` when every player has folded.
pub fn determine_winner(players: &[Player], board: &[Card], suits: &[Suit]) -> Option<Showdown> {
    let mut best: Option<Showdown> = None;
    for p in players.iter().filter(|p| !p.has_folded()) {
        let score = evaluate_hand(p.hand(), board, suits);
        tracing::debug!(player_id = p.id(), score, "hand evaluated");
        if best.is_none_or(|b| score > b.score) {
            best = Some(Showdown {
                player_id: p.id(),
                score,
                rank: rank_for_score(score),
            });
        }
    }
    best
}
