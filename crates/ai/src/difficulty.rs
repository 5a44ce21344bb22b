use engine::types::{Color, Move};
use engine::Board;
use rand::prelude::IndexedRandom;

use crate::search::select_move;

/// Strength tiers exposed to the session layer. Beginner bypasses the
/// search entirely and plays a uniformly random legal move; the other
/// tiers map to a fixed search depth. The split is a deliberate policy
/// branch, kept out of the generic search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// `None` means "play randomly, skip the search".
    pub fn search_depth(self) -> Option<u32> {
        match self {
            Difficulty::Beginner => None,
            Difficulty::Intermediate => Some(2),
            Difficulty::Advanced => Some(3),
            Difficulty::Expert => Some(4),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }
}

/// Automated-opponent entry point: picks a move for `color` at the given
/// tier. `None` when `color` has no legal move.
pub fn choose_move(board: &Board, color: Color, difficulty: Difficulty) -> Option<Move> {
    match difficulty.search_depth() {
        None => {
            let moves = board.all_legal_moves(color);
            moves.as_slice().choose(&mut rand::rng()).copied()
        }
        Some(depth) => select_move(board, color, depth),
    }
}
