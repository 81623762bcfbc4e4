use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{GameState, Stage};
use crate::player::PlayerAction;

/// Records a single player action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Player identifier (0 or 1)
    pub player_id: usize,
    /// The stage when this action occurred
    pub stage: Stage,
    /// The action taken by the player
    pub action: PlayerAction,
    /// Chips moved from the player's stack into the pot
    pub chips: u32,
}

/// Complete record of a finished game, one JSON object per line in the
/// hand history file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed used for shuffling, when the game was seeded
    pub seed: Option<u64>,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Hole cards by seat
    pub hole_cards: Vec<[Card; 2]>,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// Stacks after the pot was paid out
    pub final_chips: Vec<u32>,
    /// Hand result summary
    pub result: Option<String>,
    /// Timestamp when the hand was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

/// Winner and the label they won with.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winner: usize,
    pub rank: String,
}

impl HandRecord {
    pub fn from_state(hand_id: String, seed: Option<u64>, state: &GameState) -> Self {
        let showdown = state.winning_hand.as_ref().map(|w| ShowdownInfo {
            winner: w.player_id,
            rank: w.rank.clone(),
        });
        Self {
            hand_id,
            seed,
            small_blind: state.small_blind,
            big_blind: state.big_blind,
            hole_cards: state.players.iter().map(|p| *p.hand()).collect(),
            actions: state.history.clone(),
            board: state.community_cards.clone(),
            final_chips: state.players.iter().map(|p| p.chips()).collect(),
            result: state.game_over.then(|| state.last_action.clone()),
            ts: None,
            showdown,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`HandRecord`]s to a JSONL file and hands out sequential ids.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only numbers hands; nothing is written.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        tracing::debug!(hand_id = %rec.hand_id, "hand record written");
        Ok(())
    }
}
