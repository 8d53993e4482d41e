use crate::core::Label;

/// Errors raised when a move cannot be applied to a state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveError {
    #[error("'{0}' is not a cell label")]
    Unparseable(String),

    #[error("cell {0} is not on this board")]
    UnknownCell(Label),

    #[error("cell {0} is already claimed")]
    AlreadyClaimed(Label),

    #[error("the game is already over")]
    GameOver,
}

/// A search was asked for a move on a state that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no legal move available")]
pub struct NoLegalMoveError;

/// Errors that can occur when building a board or loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("side length must be in {min}..={max}, got {got}")]
    SideLength { got: usize, min: usize, max: usize },

    #[error("config validation error: {0}")]
    Invalid(String),
}
