use std::time::Instant;

use crate::board::Board;
use crate::types::Move;

/// Reference position with known node counts per depth.
#[derive(Debug, Clone)]
pub struct PerftPosition {
    pub name: &'static str,
    pub fen: &'static str,
    pub expected: &'static [(u32, u64)],
}

/// Standard perft positions. The non-trivial ones lean hard on castling,
/// en passant, promotion and pinned-piece handling, which is exactly why
/// they are here.
pub const PERFT_POSITIONS: &[PerftPosition] = &[
    PerftPosition {
        name: "starting position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    },
    PerftPosition {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected: &[(1, 48), (2, 2_039), (3, 97_862)],
    },
    PerftPosition {
        name: "endgame pins",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected: &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    },
    PerftPosition {
        name: "promotions",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        expected: &[(1, 44), (2, 1_486), (3, 62_379)],
    },
];

/// Counts the leaves of the legal move tree. Every explored move is played
/// on a scratch copy, so the caller's board is untouched.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in board.all_legal_moves(board.side_to_move) {
        let mut child = board.clone();
        child.apply_move_unchecked(mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Per-root-move node counts, highest first. The usual tool for pinning
/// down which branch diverges from a reference engine.
pub fn perft_divide(board: &Board, depth: u32) -> Vec<(Move, u64)> {
    let mut results = Vec::new();
    for mv in board.all_legal_moves(board.side_to_move) {
        let mut child = board.clone();
        child.apply_move_unchecked(mv);
        let nodes = if depth > 1 { perft(&child, depth - 1) } else { 1 };
        results.push((mv, nodes));
    }
    results.sort_by(|a, b| b.1.cmp(&a.1));
    results
}

/// Runs one reference position up to `max_depth`, printing timings and a
/// divide breakdown on the first failure. Returns whether all depths
/// matched.
pub fn run_position(position: &PerftPosition, max_depth: u32) -> bool {
    println!("\n{} ({})", position.name, position.fen);
    let board = match Board::from_fen(position.fen) {
        Ok(board) => board,
        Err(err) => {
            println!("  {err}");
            return false;
        }
    };

    for &(depth, expected) in position.expected {
        if depth > max_depth {
            break;
        }
        let start = Instant::now();
        let nodes = perft(&board, depth);
        let elapsed = start.elapsed().as_secs_f64();
        if nodes == expected {
            println!("  depth {depth}: {nodes} nodes in {elapsed:.3}s");
        } else {
            println!("  depth {depth}: {nodes} nodes, expected {expected} - FAIL");
            for (mv, count) in perft_divide(&board, depth).iter().take(10) {
                println!("    {mv}: {count}");
            }
            return false;
        }
    }
    true
}
