//! Errors returned by engine commands.
//!
//! Every variant is recoverable: the message is meant to be shown to the
//! player as-is and the engine stays usable afterwards.

/// Rejected engine command
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameError {
    /// The game already ended; only a reset brings it back
    #[error("Game over. Start new game.")]
    GameOver,

    /// A guess arrived after the attempt budget was spent
    #[error("No attempts left. Start new game.")]
    AttemptsExhausted,

    /// The guess is not exactly four decimal digits
    #[error("Enter exactly 4 digits!")]
    InvalidFormat,

    /// The hint budget for this difficulty is used up
    #[error("No hints remaining!")]
    NoHintsRemaining,
}

/// Result type used by engine commands.
pub type GameResult<T> = Result<T, GameError>;
