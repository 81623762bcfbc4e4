use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::ActionRecord;
use crate::player::{Player, STARTING_CHIPS};

/// Betting stages of a hand, in the only order they can occur.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Hole cards dealt, blinds posted
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hand decided
    Showdown,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
            Stage::Showdown => "showdown",
        }
    }
}

/// Table parameters fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub starting_chips: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Seconds the human has to act before `handle_timeout` applies
    pub turn_timeout_secs: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            small_blind: 10,
            big_blind: 20,
            turn_timeout_secs: 30,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 {
            return Err(GameError::InvalidConfig(
                "small_blind must be > 0".to_string(),
            ));
        }
        if self.small_blind >= self.big_blind {
            return Err(GameError::InvalidConfig(format!(
                "small_blind ({}) must be below big_blind ({})",
                self.small_blind, self.big_blind
            )));
        }
        if self.starting_chips <= self.big_blind {
            return Err(GameError::InvalidConfig(format!(
                "starting_chips ({}) must exceed big_blind ({})",
                self.starting_chips, self.big_blind
            )));
        }
        Ok(())
    }
}

/// Winner of a finished game and the label describing how they won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningHand {
    pub player_id: usize,
    pub rank: String,
}

/// Label recorded when the hand ends because a player folded.
pub const WIN_BY_FOLD: &str = "Win by fold";

/// Snapshot of a heads-up game.
///
/// Transitions never mutate a snapshot in place: each one clones the input,
/// sets every changed field explicitly and returns the new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    /// Amount every active player must match this street
    pub current_bet: u32,
    pub deck: Deck,
    pub stage: Stage,
    pub dealer: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    pub turn_timeout_secs: u32,
    pub current_player: usize,
    pub last_raise_player: Option<usize>,
    /// Chips each player has put in during the current street
    pub round_bets: BTreeMap<usize, u32>,
    pub last_action: String,
    pub betting_round_complete: bool,
    pub game_over: bool,
    pub winning_hand: Option<WinningHand>,
    /// Every action taken this hand, oldest first
    pub history: Vec<ActionRecord>,
}

impl GameState {
    pub fn round_bet(&self, player_id: usize) -> u32 {
        self.round_bets.get(&player_id).copied().unwrap_or(0)
    }

    /// Chips `player_id` still owes to match the current bet.
    pub fn to_call(&self, player_id: usize) -> u32 {
        self.current_bet.saturating_sub(self.round_bet(player_id))
    }

    /// Chips in play: all stacks plus the pot. Constant for the whole game.
    pub fn total_chips(&self) -> u32 {
        self.players.iter().map(Player::chips).sum::<u32>() + self.pot
    }

    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.has_folded())
    }

    /// Seat that acts after `player_id`.
    pub fn next_seat(&self, player_id: usize) -> usize {
        (player_id + 1) % self.players.len().max(1)
    }
}
