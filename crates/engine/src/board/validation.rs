use super::moves::KING_OFFSETS;
use super::Board;
use crate::types::*;

impl Board {
    /// Squares the piece on `from` could capture on. Identical to the
    /// pseudo-legal destinations except that pawns attack only their two
    /// forward diagonals (regardless of occupancy, and never the push
    /// squares or en passant target) and kings contribute their eight
    /// neighbours without castling entries. This must stay structurally
    /// separate from `legal_moves`: it is what the check test itself is
    /// built from, so it can never consult the self-check filter.
    pub fn attack_squares(&self, from: Square) -> Vec<Square> {
        let piece = match self.get_piece(from) {
            Some(piece) => piece,
            None => return Vec::new(),
        };

        match piece.kind {
            PieceKind::Pawn => {
                let direction = piece.color.forward();
                [-1, 1]
                    .iter()
                    .filter_map(|&d_file| from.offset(d_file, direction))
                    .collect()
            }
            PieceKind::King => KING_OFFSETS
                .iter()
                .filter_map(|&(d_file, d_rank)| from.offset(d_file, d_rank))
                .collect(),
            _ => self.pseudo_legal_destinations(from),
        }
    }

    /// Whether `color`'s king square is inside any opposing piece's attack
    /// set. A board with no king for `color` reports no check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let king_square = match self.find_king(color) {
            Some(square) => square,
            None => return false,
        };

        self.pieces_of(color.opposite())
            .any(|(square, _)| self.attack_squares(square).contains(&king_square))
    }

    /// Self-check probe for the legality filter: plays `mv` out on a
    /// scratch copy (including en passant and castling resolution) and
    /// reports whether `mover`'s king ends up attacked. The caller's board
    /// is never touched.
    pub fn leaves_king_in_check(&self, mv: Move, mover: Color) -> bool {
        let mut probe = self.clone();
        probe.apply_move_unchecked(mv);
        probe.is_in_check(mover)
    }

    /// Castling transit probe: relocates the king to `to` on a scratch copy
    /// without any special-move bookkeeping and tests for check there.
    pub(crate) fn king_transit_is_safe(&self, from: Square, to: Square, color: Color) -> bool {
        let mut probe = self.clone();
        let king = probe.get_piece(from);
        probe.set_piece(to, king);
        probe.set_piece(from, None);
        !probe.is_in_check(color)
    }
}
