use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted: needed {needed} cards, {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid raise amount: {amount}, minimum: {minimum}")]
    InvalidRaiseAmount { amount: u32, minimum: u32 },
    #[error("Raising is not allowed right now")]
    RaiseNotAllowed,
    #[error("Insufficient chips for action")]
    InsufficientChips,
    #[error("Game is already over")]
    GameOver,
    #[error("Player {0} already folded")]
    PlayerAlreadyFolded(usize),
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
}
