use engine::types::{Color, PieceKind, Square};
use engine::Board;

use crate::types::{CENTER_BONUS, MATERIAL_SCALE};

/// Static, position-only score, positive favoring White: scaled material
/// plus a small bonus for occupying the four central squares. No lookahead,
/// no mobility, no pawn structure.
pub fn evaluate_position(board: &Board) -> i32 {
    let mut score = 0;
    for index in 0..64 {
        let square = Square(index);
        if let Some(piece) = board.get_piece(square) {
            let sign = match piece.color {
                Color::White => 1,
                Color::Black => -1,
            };
            score += sign * material_value(piece.kind) * MATERIAL_SCALE;
            if is_center(square) {
                score += sign * CENTER_BONUS;
            }
        }
    }
    score
}

fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

fn is_center(square: Square) -> bool {
    (3..=4).contains(&square.file()) && (3..=4).contains(&square.rank())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_level() {
        assert_eq!(evaluate_position(&Board::initial()), 0);
    }

    #[test]
    fn material_and_center_terms_are_signed_by_color() {
        // Lone white pawn on a central square: 1 * 10 + 2.
        let board = Board::from_fen("8/8/8/4P3/8/8/8/K6k w - - 0 1").unwrap();
        assert_eq!(evaluate_position(&board), 12);

        // Lone black knight on a central square: -(3 * 10 + 2).
        let board = Board::from_fen("8/8/8/8/3n4/8/8/K6k w - - 0 1").unwrap();
        assert_eq!(evaluate_position(&board), -32);

        // Off-center pieces score material only; kings are worth nothing.
        let board = Board::from_fen("8/8/8/8/8/8/8/KQ5k w - - 0 1").unwrap();
        assert_eq!(evaluate_position(&board), 90);
    }

    #[test]
    fn mirrored_material_cancels_out() {
        let board = Board::from_fen("r3k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(evaluate_position(&board), 0);
    }
}
