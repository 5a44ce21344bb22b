use engine::types::{Color, Move};
use engine::Board;

use crate::evaluation::evaluate_position;
use crate::types::{SearchResult, DRAW_SCORE, MATE_SCORE};

/// Fixed-depth minimax with alpha-beta pruning. White is the maximizing
/// side; the recursion alternates every ply. Each candidate root move is
/// applied to a scratch copy of the board and searched `depth` further
/// plies with a fresh window, so pruning changes how fast the answer
/// arrives but never which move wins. Value ties keep the first move in
/// enumeration order, which makes the result deterministic for a given
/// position and depth.
pub fn search(board: &Board, color: Color, depth: u32) -> SearchResult {
    let moves = board.all_legal_moves(color);
    if moves.is_empty() {
        let evaluation = if board.is_in_check(color) {
            match color {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            }
        } else {
            DRAW_SCORE
        };
        return SearchResult {
            best_move: None,
            evaluation,
            depth,
            nodes_searched: 0,
        };
    }

    let maximizing = color == Color::White;
    let mut best_move = None;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut nodes = 0;

    for mv in moves {
        let mut child = board.clone();
        child.apply_move_unchecked(mv);
        let value = minimax(&child, depth, i32::MIN, i32::MAX, !maximizing, &mut nodes);

        let improved = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improved {
            best_value = value;
            best_move = Some(mv);
        }
    }

    SearchResult {
        best_move,
        evaluation: best_value,
        depth,
        nodes_searched: nodes,
    }
}

/// The automated-opponent surface when only the move matters. `None`
/// means `color` has no legal move and the game-end classifier should have
/// the last word.
pub fn select_move(board: &Board, color: Color, depth: u32) -> Option<Move> {
    search(board, color, depth).best_move
}

fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return evaluate_position(board);
    }

    let side = if maximizing { Color::White } else { Color::Black };
    let moves = board.all_legal_moves(side);
    if moves.is_empty() {
        // Mate counts for whoever delivered it; a dead-end without check
        // is stalemate and scores level.
        return if board.is_in_check(side) {
            if maximizing {
                -MATE_SCORE
            } else {
                MATE_SCORE
            }
        } else {
            DRAW_SCORE
        };
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let mut child = board.clone();
            child.apply_move_unchecked(mv);
            let value = minimax(&child, depth - 1, alpha, beta, false, nodes);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let mut child = board.clone();
            child.apply_move_unchecked(mv);
            let value = minimax(&child, depth - 1, alpha, beta, true, nodes);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::types::{GameStatus, Square};

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn search_is_deterministic_at_fixed_depth() {
        let mut board = Board::initial();
        board.apply_move_unchecked(Move::new(square("e2"), square("e4")));

        let first = select_move(&board, Color::Black, 2);
        let second = select_move(&board, Color::Black, 2);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn depth_zero_plays_the_greedy_capture() {
        // The pawn on e4 can take a hanging queen on d5.
        let board = Board::from_fen("k7/8/8/3q4/4P3/8/8/K7 w - - 0 1").unwrap();
        let result = search(&board, Color::White, 0);
        assert_eq!(result.best_move, Some(Move::new(square("e4"), square("d5"))));
        assert_eq!(result.evaluation, 12);
    }

    #[test]
    fn back_rank_mate_in_one_is_found_for_white() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        let result = search(&board, Color::White, 2);
        assert_eq!(result.best_move, Some(Move::new(square("a1"), square("a8"))));
        assert_eq!(result.evaluation, MATE_SCORE);

        let mut mated = board.clone();
        mated.apply_move_unchecked(Move::new(square("a1"), square("a8")));
        assert_eq!(mated.status(), GameStatus::Checkmate(Color::White));
    }

    #[test]
    fn mate_in_one_is_found_for_black_too() {
        let board = Board::from_fen("r3k3/8/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
        let result = search(&board, Color::Black, 2);
        assert_eq!(result.best_move, Some(Move::new(square("a8"), square("a1"))));
        assert_eq!(result.evaluation, -MATE_SCORE);
    }

    #[test]
    fn checkmated_side_gets_no_move_and_a_mate_score() {
        // Final position of the fastest possible mate, white to move.
        let board = Board::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        let result = search(&board, Color::White, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.evaluation, -MATE_SCORE);
        assert_eq!(result.nodes_searched, 0);
    }

    #[test]
    fn stalemated_side_gets_no_move_and_a_level_score() {
        let board = Board::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").unwrap();
        let result = search(&board, Color::Black, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.evaluation, DRAW_SCORE);
    }

    #[test]
    fn search_leaves_the_caller_board_untouched() {
        let board = Board::initial();
        let copy = board.clone();
        search(&board, Color::White, 2);
        assert_eq!(board, copy);
    }

    #[test]
    fn deeper_search_avoids_the_defended_pawn() {
        // The b4 pawn is defended by the rook on a4: the greedy grab looks
        // best at depth 0 and loses the rook once the search sees the
        // recapture.
        let board = Board::from_fen("4k3/8/8/8/rp6/8/8/1R2K3 w - - 0 1").unwrap();
        let shallow = search(&board, Color::White, 0);
        assert_eq!(
            shallow.best_move,
            Some(Move::new(square("b1"), square("b4")))
        );

        let deeper = search(&board, Color::White, 2);
        assert!(deeper.best_move.is_some());
        assert_ne!(deeper.best_move, Some(Move::new(square("b1"), square("b4"))));
    }
}
