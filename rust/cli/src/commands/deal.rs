//! `deal`: start one game and print what was dealt, for inspecting seeds.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_board;
use duelpoker_engine::engine::initialize_game;
use duelpoker_engine::player::{AI, HUMAN};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Deal with `seed` (or the configured seed, or a random one) and print both
/// hands, the posted blinds and what is left in the deck.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let state = initialize_game(&cfg.table(), &mut rng)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player: {}", format_board(state.players[HUMAN].hand()))?;
    writeln!(out, "AI: {}", format_board(state.players[AI].hand()))?;
    writeln!(
        out,
        "Blinds: SB={} BB={} | Pot: ${}",
        state.small_blind, state.big_blind, state.pot
    )?;
    writeln!(out, "Deck: {} cards remaining", state.deck.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn same_seed_same_deal() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        handle_deal_command(Some(42), &mut first).unwrap();
        handle_deal_command(Some(42), &mut second).unwrap();
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        assert!(text.starts_with("Seed: 42\n"));
        assert!(text.contains("Player: ["));
        assert!(text.contains("Deck: 48 cards remaining"));
    }
}
