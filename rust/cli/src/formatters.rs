//! Card, board and table formatters for terminal display.
//!
//! Suits render as ♠ ♣ ♥ ♦ where the terminal is expected to cope, and as
//! s c h d letters otherwise (older Windows consoles).
//!
//! ```rust
//! use duelpoker_engine::cards::{Card, Rank, Suit};
//! use duelpoker_cli::formatters::{format_board, format_card};
//!
//! let ten = Card::new(Rank::Ten, Suit::Hearts);
//! assert!(format_card(&ten) == "10♥" || format_card(&ten) == "10h");
//! assert_eq!(format_board(&[]), "[]");
//! ```

use duelpoker_engine::cards::{Card, Suit};
use duelpoker_engine::game::GameState;
use duelpoker_engine::logger::ActionRecord;
use duelpoker_engine::player::{PlayerAction, AI, HUMAN};

/// Windows consoles only render the suit glyphs inside modern terminals.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// Cards in bracket notation, e.g. "[A♠ K♥ Q♦]" or "[]".
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Raise(amount) => format!("raise to {}", amount),
    }
}

/// Multi-line table view from the human's seat. The AI's cards stay hidden
/// until `reveal` is set.
pub fn format_table(state: &GameState, reveal: bool) -> String {
    let human = &state.players[HUMAN];
    let ai = &state.players[AI];
    let ai_cards = if reveal {
        format_board(ai.hand())
    } else {
        "[?? ??]".to_string()
    };
    let mut lines = vec![
        format!(
            "Stage: {} | Pot: ${} | Current bet: ${}",
            state.stage.as_str(),
            state.pot,
            state.current_bet
        ),
        format!("Board: {}", format_board(&state.community_cards)),
        format!(
            "You: {} ${}{}",
            format_board(human.hand()),
            human.chips(),
            if human.has_folded() { " (folded)" } else { "" }
        ),
        format!(
            "AI:  {} ${}{}",
            ai_cards,
            ai.chips(),
            if ai.has_folded() { " (folded)" } else { "" }
        ),
    ];
    let to_call = state.to_call(HUMAN);
    if !state.game_over && state.current_player == HUMAN && to_call > 0 {
        lines.push(format!("To call: ${}", to_call));
    }
    lines.join("\n")
}

/// One line per recorded action, e.g. "flop    AI      raise to 40 ($40)".
pub fn format_history(history: &[ActionRecord]) -> String {
    history
        .iter()
        .map(|rec| {
            let who = if rec.player_id == HUMAN { "Player" } else { "AI" };
            format!(
                "{:<8}{:<8}{} (${})",
                rec.stage.as_str(),
                who,
                format_action(&rec.action),
                rec.chips
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
