use super::Board;
use crate::types::*;

impl Board {
    /// Plays out a move that is already known to be legal: resolves
    /// capture, castling, en passant and promotion, updates castling rights
    /// and the en passant window, and flips the side to move. Callers that
    /// need validation go through `Game::apply_move`.
    pub fn apply_move_unchecked(&mut self, mv: Move) {
        let piece = match self.get_piece(mv.from) {
            Some(piece) => piece,
            None => return,
        };

        // Special-move classification has to happen before the en passant
        // window is cleared below.
        let is_castling = self.is_castling_move(mv);
        let is_en_passant = self.is_en_passant_move(mv);
        let captured = self.get_piece(mv.to);

        self.update_castling_rights(piece, captured, mv);

        let placed = match mv.promotion {
            Some(kind) if piece.kind == PieceKind::Pawn => Piece::new(kind, piece.color),
            _ => piece,
        };
        self.set_piece(mv.to, Some(placed));
        self.set_piece(mv.from, None);

        if is_en_passant {
            if let Some(victim) = self.en_passant_pawn {
                self.set_piece(victim, None);
            }
        }

        if is_castling {
            let rank = piece.color.back_rank();
            let (rook_from, rook_to) = if mv.to.file() == 6 {
                (Square::new(7, rank), Square::new(5, rank))
            } else {
                (Square::new(0, rank), Square::new(3, rank))
            };
            let rook = self.get_piece(rook_from);
            self.set_piece(rook_to, rook);
            self.set_piece(rook_from, None);
        }

        self.en_passant_target = None;
        self.en_passant_pawn = None;
        if piece.kind == PieceKind::Pawn
            && (mv.to.rank() as i8 - mv.from.rank() as i8).abs() == 2
        {
            let skipped = (mv.from.rank() as i8 + piece.color.forward()) as u8;
            self.en_passant_target = Some(Square::new(mv.from.file(), skipped));
            self.en_passant_pawn = Some(mv.to);
        }

        self.side_to_move = piece.color.opposite();
    }

    /// A king sliding two files along its rank.
    pub fn is_castling_move(&self, mv: Move) -> bool {
        match self.get_piece(mv.from) {
            Some(piece) => {
                piece.kind == PieceKind::King
                    && (mv.to.file() as i8 - mv.from.file() as i8).abs() == 2
            }
            None => false,
        }
    }

    /// A pawn capturing onto the current en passant target square.
    pub fn is_en_passant_move(&self, mv: Move) -> bool {
        match self.get_piece(mv.from) {
            Some(piece) => {
                piece.kind == PieceKind::Pawn
                    && self.en_passant_target == Some(mv.to)
                    && mv.from.file() != mv.to.file()
            }
            None => false,
        }
    }

    fn update_castling_rights(&mut self, piece: Piece, captured: Option<Piece>, mv: Move) {
        if piece.kind == PieceKind::King {
            remove_castling_right(&mut self.castling_rights, castling_right(piece.color, true));
            remove_castling_right(&mut self.castling_rights, castling_right(piece.color, false));
        }
        if piece.kind == PieceKind::Rook {
            self.clear_rook_right(mv.from);
        }
        if captured.map_or(false, |taken| taken.kind == PieceKind::Rook) {
            self.clear_rook_right(mv.to);
        }
    }

    fn clear_rook_right(&mut self, square: Square) {
        let right = match (square.file(), square.rank()) {
            (0, 0) => WHITE_QUEENSIDE,
            (7, 0) => WHITE_KINGSIDE,
            (0, 7) => BLACK_QUEENSIDE,
            (7, 7) => BLACK_KINGSIDE,
            _ => return,
        };
        remove_castling_right(&mut self.castling_rights, right);
    }

    /// Castling is available when the rights flag is still set, king and
    /// rook stand on their home squares, every square between them is
    /// empty, the king is not currently in check, and neither the square it
    /// passes through nor the one it lands on is attacked.
    pub fn can_castle(&self, color: Color, kingside: bool) -> bool {
        if !has_castling_right(self.castling_rights, castling_right(color, kingside)) {
            return false;
        }

        let rank = color.back_rank();
        let king_start = Square::new(4, rank);
        let rook_start = Square::new(if kingside { 7 } else { 0 }, rank);
        if self.get_piece(king_start) != Some(Piece::new(PieceKind::King, color))
            || self.get_piece(rook_start) != Some(Piece::new(PieceKind::Rook, color))
        {
            return false;
        }

        let between: &[u8] = if kingside { &[5, 6] } else { &[1, 2, 3] };
        if between
            .iter()
            .any(|&file| self.get_piece(Square::new(file, rank)).is_some())
        {
            return false;
        }

        if self.is_in_check(color) {
            return false;
        }

        let transit: [u8; 2] = if kingside { [5, 6] } else { [3, 2] };
        transit
            .iter()
            .all(|&file| self.king_transit_is_safe(king_start, Square::new(file, rank), color))
    }

    /// True when any piece of `color` has at least one legal move.
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(square, _)| !self.legal_moves(square).is_empty())
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Covers exactly three drawn configurations: king vs king, king and
    /// bishop vs king, king and knight vs king. Piece counts only, no
    /// placement check; other dead positions (two knights, same-colored
    /// bishops) are intentionally not detected.
    pub fn is_insufficient_material(&self) -> bool {
        let kinds: Vec<PieceKind> = self.squares.iter().flatten().map(|piece| piece.kind).collect();
        match kinds.len() {
            2 => kinds.iter().all(|&kind| kind == PieceKind::King),
            3 => {
                kinds.iter().filter(|&&kind| kind == PieceKind::King).count() == 2
                    && kinds
                        .iter()
                        .any(|&kind| kind == PieceKind::Bishop || kind == PieceKind::Knight)
            }
            _ => false,
        }
    }

    /// Classifies the position for the side to move. Mate and stalemate
    /// outrank the material draw, which outranks a plain check.
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        if !self.has_legal_moves(side) {
            return if self.is_in_check(side) {
                GameStatus::Checkmate(side.opposite())
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_insufficient_material() {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }
        if self.is_in_check(side) {
            GameStatus::Check(side)
        } else {
            GameStatus::InProgress
        }
    }
}
