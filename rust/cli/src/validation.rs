//! Input parsing for the interactive `play` command.

use duelpoker_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// User entered q or quit
    Quit,
    Invalid(String),
}

/// Parse user input into a [`PlayerAction`] or a quit request.
///
/// Accepted (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c", "call", "k" or "check" → Call (a check when nothing is owed)
/// - "r N" or "raise N" → Raise to a street total of N
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// # use duelpoker_cli::validation::{parse_player_action, ParseResult};
/// use duelpoker_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
/// assert_eq!(parse_player_action("check"), ParseResult::Action(PlayerAction::Call));
/// assert_eq!(
///     parse_player_action("raise 100"),
///     ParseResult::Action(PlayerAction::Raise(100))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("bet 5") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "call" | "c" | "check" | "k" => ParseResult::Action(PlayerAction::Call),
        "raise" | "r" => match parts.get(1).map(|s| s.parse::<u32>()) {
            None => ParseResult::Invalid(
                "Raise requires an amount (e.g., 'raise 60')".to_string(),
            ),
            Some(Ok(amount)) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
            Some(Ok(_)) => ParseResult::Invalid("Raise amount must be positive".to_string()),
            Some(Err(_)) => ParseResult::Invalid("Invalid raise amount".to_string()),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, call, check, raise <amount>, q",
            other
        )),
    }
}
