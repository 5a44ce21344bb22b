use thiserror::Error;

use crate::types::{Color, Move};

/// Everything here is recoverable by the caller: re-prompt for a different
/// move or a promotion choice. Strategically bad moves are never errors,
/// legality is the only admission criterion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move {0}: not in the legal move set for that square and turn")]
    IllegalMove(Move),
    #[error("move {0} reaches the final rank and needs a promotion piece")]
    PromotionRequired(Move),
    #[error("no {0} king on the board")]
    NoKingFound(Color),
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("no moves to undo")]
    NothingToUndo,
}
