//! # duelpoker-engine: Heads-Up Poker Round Engine
//!
//! Game-state engine for a single Texas Hold'em-style hand between a human
//! (seat 0) and an AI (seat 1): deck generation and dealing, the betting state
//! machine, stage progression and a coarse showdown evaluator.
//!
//! Every transition takes a [`game::GameState`] snapshot by reference and
//! returns the next snapshot. Randomness is always passed in by the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`deck`] - Suit table, shuffled deck generation and dealing
//! - [`hand`] - Heuristic hand scoring and winner selection
//! - [`player`] - Player seats, stacks and actions
//! - [`game`] - Game state snapshot, stages and table configuration
//! - [`rules`] - Turn and raise validation
//! - [`betting`] - Call/raise/fold transitions, round completion, timeouts
//! - [`engine`] - Game initialization and stage progression
//! - [`logger`] - Action records and JSONL hand history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use duelpoker_engine::betting::{is_round_complete, player_call};
//! use duelpoker_engine::engine::{initialize_game, progress_game};
//! use duelpoker_engine::game::{Stage, TableConfig};
//! use duelpoker_engine::player::{PlayerAction, AI};
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(42);
//! let state = initialize_game(&TableConfig::default(), &mut rng).unwrap();
//!
//! // human completes the small blind, AI checks its option
//! let state = player_call(&state);
//! let state = duelpoker_engine::betting::apply_action(&state, AI, PlayerAction::Call).unwrap();
//! assert!(is_round_complete(&state));
//!
//! let state = progress_game(&state).unwrap();
//! assert_eq!(state.stage, Stage::Flop);
//! assert_eq!(state.community_cards.len(), 3);
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
