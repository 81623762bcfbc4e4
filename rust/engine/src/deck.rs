use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::GameError;

/// The single suit table shared by deck construction and hand evaluation.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// Ordered card sequence. The top of the deck is the end of the vector;
/// every draw takes cards from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled 52 cards, suit by suit in [`SUITS`] order.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &SUITS {
            for &rank in &RANKS {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take `n` cards off the top, in the order they come off.
    ///
    /// Fails without touching the deck when fewer than `n` cards remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::DeckExhausted {
                needed: n,
                remaining: self.cards.len(),
            });
        }
        let mut drawn = self.cards.split_off(self.cards.len() - n);
        drawn.reverse();
        Ok(drawn)
    }
}

/// Build a full deck and shuffle it with a uniform Fisher–Yates permutation.
pub fn generate_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    let mut deck = Deck::standard();
    deck.cards.shuffle(rng);
    tracing::trace!(cards = deck.len(), "deck generated");
    deck
}

/// Hole cards for every seat plus whatever is left of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<[Card; 2]>,
    pub remaining: Deck,
}

/// Deal two cards to each of `num_players` seats, one card per seat per pass,
/// from the top of `deck`. The input deck is left untouched.
///
/// # Errors
///
/// Returns [`GameError::DeckExhausted`] when the deck holds fewer than
/// `num_players * 2` cards.
///
/// # Examples
///
/// ```
/// use duelpoker_engine::deck::{deal_cards, Deck};
///
/// let deck = Deck::standard();
/// let deal = deal_cards(2, &deck).unwrap();
/// assert_eq!(deal.hands.len(), 2);
/// assert_eq!(deal.remaining.len(), 48);
/// // seat 0 gets the top card, seat 1 the next one
/// assert_eq!(deal.hands[0][0], deck.cards()[51]);
/// assert_eq!(deal.hands[1][0], deck.cards()[50]);
/// ```
pub fn deal_cards(num_players: usize, deck: &Deck) -> Result<Deal, GameError> {
    let needed = num_players * 2;
    if deck.len() < needed {
        return Err(GameError::DeckExhausted {
            needed,
            remaining: deck.len(),
        });
    }
    let mut remaining = deck.clone();
    let first = remaining.draw(num_players)?;
    let second = remaining.draw(num_players)?;
    let hands = first
        .into_iter()
        .zip(second)
        .map(|(a, b)| [a, b])
        .collect();
    Ok(Deal { hands, remaining })
}
