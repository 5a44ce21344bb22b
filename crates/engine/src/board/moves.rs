use super::Board;
use crate::types::*;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Legal moves for the piece on `from`: pseudo-legal destinations with
    /// every candidate discarded that would leave the mover's own king in
    /// check. Pawn moves onto the final rank are expanded into the four
    /// promotion choices. Empty squares yield an empty list.
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        let piece = match self.get_piece(from) {
            Some(piece) => piece,
            None => return Vec::new(),
        };

        let mut moves = Vec::new();
        for to in self.pseudo_legal_destinations(from) {
            // The promotion kind never affects whether the mover's own king
            // ends up attacked, so one probe covers all four choices.
            if self.leaves_king_in_check(Move::new(from, to), piece.color) {
                continue;
            }
            if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
                for kind in [
                    PieceKind::Queen,
                    PieceKind::Rook,
                    PieceKind::Bishop,
                    PieceKind::Knight,
                ] {
                    moves.push(Move::new_promotion(from, to, kind));
                }
            } else {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }

    /// Every legal move for `color`, pieces visited in rank-major scan
    /// order. The order is stable so repeated calls enumerate identically.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut all = Vec::new();
        for (square, _) in self.pieces_of(color) {
            all.extend(self.legal_moves(square));
        }
        all
    }

    /// Destinations satisfying piece-movement rules and occupancy only; the
    /// mover's king may still be left in check.
    pub fn pseudo_legal_destinations(&self, from: Square) -> Vec<Square> {
        let piece = match self.get_piece(from) {
            Some(piece) => piece,
            None => return Vec::new(),
        };

        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(from, piece.color),
            PieceKind::Knight => self.offset_destinations(from, &KNIGHT_OFFSETS, piece.color),
            PieceKind::Bishop => self.sliding_destinations(from, &BISHOP_DIRECTIONS, piece.color),
            PieceKind::Rook => self.sliding_destinations(from, &ROOK_DIRECTIONS, piece.color),
            PieceKind::Queen => {
                let mut moves = self.sliding_destinations(from, &ROOK_DIRECTIONS, piece.color);
                moves.extend(self.sliding_destinations(from, &BISHOP_DIRECTIONS, piece.color));
                moves
            }
            PieceKind::King => self.king_destinations(from, piece.color),
        }
    }

    fn pawn_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        let direction = color.forward();

        if let Some(forward) = from.offset(0, direction) {
            if self.get_piece(forward).is_none() {
                moves.push(forward);

                // Two-square advance needs the start rank and both squares free.
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = from.offset(0, 2 * direction) {
                        if self.get_piece(double).is_none() {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for d_file in [-1, 1] {
            if let Some(capture) = from.offset(d_file, direction) {
                if let Some(target) = self.get_piece(capture) {
                    if target.color != color {
                        moves.push(capture);
                    }
                }
            }
        }

        if let Some(target) = self.en_passant_target {
            let capture_rank = match color {
                Color::White => 4,
                Color::Black => 3,
            };
            if from.rank() == capture_rank
                && (from.file() as i8 - target.file() as i8).abs() == 1
                && target.rank() as i8 == from.rank() as i8 + direction
            {
                moves.push(target);
            }
        }

        moves
    }

    fn offset_destinations(&self, from: Square, offsets: &[(i8, i8)], color: Color) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(d_file, d_rank)| from.offset(d_file, d_rank))
            .filter(|&to| self.get_piece(to).map_or(true, |piece| piece.color != color))
            .collect()
    }

    /// Ray-cast: a ray stops at the first occupied square, including it
    /// only when it holds an opponent piece.
    fn sliding_destinations(
        &self,
        from: Square,
        directions: &[(i8, i8)],
        color: Color,
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(d_file, d_rank) in directions {
            let mut square = from;
            while let Some(next) = square.offset(d_file, d_rank) {
                match self.get_piece(next) {
                    None => moves.push(next),
                    Some(blocker) => {
                        if blocker.color != color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                square = next;
            }
        }
        moves
    }

    fn king_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = self.offset_destinations(from, &KING_OFFSETS, color);

        if self.can_castle(color, true) {
            moves.push(Square::new(6, color.back_rank()));
        }
        if self.can_castle(color, false) {
            moves.push(Square::new(2, color.back_rank()));
        }
        moves
    }
}
