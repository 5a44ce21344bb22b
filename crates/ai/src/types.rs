use engine::Move;

/// Outcome of one `search` call.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Best value found, positive favoring White.
    pub evaluation: i32,
    pub depth: u32,
    pub nodes_searched: u64,
}

/// Score returned when the side to move at a node has been mated.
pub const MATE_SCORE: i32 = 1000;
pub const DRAW_SCORE: i32 = 0;

/// Material is scaled up so the center bonus stays a tie-break nudge, not
/// a reason to give up a pawn.
pub const MATERIAL_SCALE: i32 = 10;
pub const CENTER_BONUS: i32 = 2;
