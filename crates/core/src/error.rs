//! Error types for the game core
use thiserror::Error;

/// Why a flip request was ignored
///
/// These are policy checks rather than failures: the front end drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipRejected {
    #[error("the game is over")]
    GameOver,

    #[error("it is not the human's turn")]
    NotYourTurn,

    #[error("a flipped pair is still being resolved")]
    Resolving,

    #[error("two cards are already face-up")]
    TurnFull,

    #[error("position {0} is off the table")]
    OutOfRange(usize),

    #[error("card at position {0} is already face-up")]
    AlreadyFaceUp(usize),

    #[error("card at position {0} is already matched")]
    AlreadyMatched(usize),
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown difficulty '{0}' (expected easy, normal or hard)")]
    UnknownDifficulty(String),

    #[error("unknown memory policy '{0}' (expected both or human-only)")]
    UnknownMemoryPolicy(String),

    #[error("invalid value '{value}' for {key}")]
    InvalidNumber { key: &'static str, value: String },
}
