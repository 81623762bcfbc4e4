use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Seat of the human player.
pub const HUMAN: usize = 0;
/// Seat of the AI opponent.
pub const AI: usize = 1;

/// Default starting stack size for each player in chips
pub const STARTING_CHIPS: u32 = 1_000;

/// An action taken during a betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Match the current bet (a check when nothing is owed)
    Call,
    /// Raise to an absolute street total
    Raise(u32),
}

/// A seat at the table: hole cards, chip stack, fold status and, for the
/// human, the deadline of the current turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: usize,
    is_human: bool,
    hand: [Card; 2],
    chips: u32,
    has_folded: bool,
    timeout_at: Option<DateTime<Utc>>,
}

impl Player {
    pub fn new(id: usize, hand: [Card; 2], chips: u32) -> Self {
        Self {
            id,
            is_human: id == HUMAN,
            hand,
            chips,
            has_folded: false,
            timeout_at: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn is_human(&self) -> bool {
        self.is_human
    }
    pub fn hand(&self) -> &[Card; 2] {
        &self.hand
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }
    pub fn timeout_at(&self) -> Option<DateTime<Utc>> {
        self.timeout_at
    }

    /// Name used in action descriptions.
    pub fn label(&self) -> &'static str {
        if self.is_human {
            "Player"
        } else {
            "AI"
        }
    }

    pub fn bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.chips {
            return Err(GameError::InsufficientChips);
        }
        self.chips -= amount;
        Ok(())
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Folding is one-way for the rest of the hand.
    pub fn fold(&mut self) {
        self.has_folded = true;
    }

    pub fn set_timeout_at(&mut self, deadline: Option<DateTime<Utc>>) {
        self.timeout_at = deadline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand() -> [Card; 2] {
        [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
        ]
    }

    #[test]
    fn betting_reduces_stack_and_cannot_overbet() {
        let mut p = Player::new(HUMAN, hand(), STARTING_CHIPS);
        p.bet(300).expect("bet should succeed");
        assert_eq!(p.chips(), 700);
        assert_eq!(p.bet(701), Err(GameError::InsufficientChips));
        assert_eq!(p.chips(), 700);
    }

    #[test]
    fn seat_zero_is_human() {
        assert!(Player::new(HUMAN, hand(), 10).is_human());
        assert!(!Player::new(AI, hand(), 10).is_human());
        assert_eq!(Player::new(AI, hand(), 10).label(), "AI");
    }
}
