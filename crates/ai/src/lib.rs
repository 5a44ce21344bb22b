//! Automated opponent for the chess engine: static evaluation, fixed-depth
//! minimax with alpha-beta pruning, and the difficulty-tier policy that
//! picks between random play and search.

pub mod difficulty;
pub mod evaluation;
pub mod search;
pub mod types;

pub use difficulty::{choose_move, Difficulty};
pub use evaluation::evaluate_position;
pub use search::{search, select_move};
pub use types::*;
