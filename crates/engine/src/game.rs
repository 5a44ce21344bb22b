use crate::board::Board;
use crate::error::EngineError;
use crate::types::*;

/// One playing session: the evolving board, the move history that can
/// replay it, and the cached status for the side to move. The history is
/// append-only during play and popped on undo; its length parity tracks
/// whose turn follows.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
    status: GameStatus,
}

impl Game {
    /// Fresh game from the standard starting position.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Session over an arbitrary position, e.g. one loaded from FEN.
    pub fn from_board(board: Board) -> Self {
        let status = board.status();
        Self {
            board,
            history: Vec::new(),
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        self.board.legal_moves(from)
    }

    /// Validates and plays one move for the side to move. Rejections:
    /// `IllegalMove` when the move is not in the legal set for that square
    /// and turn (or the game is already over), `PromotionRequired` when a
    /// pawn reaches the final rank without a chosen piece, `NoKingFound`
    /// when the mover's king is missing entirely.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveRecord, EngineError> {
        if self.status.is_game_over() {
            return Err(EngineError::IllegalMove(mv));
        }

        let piece = self
            .board
            .get_piece(mv.from)
            .ok_or(EngineError::IllegalMove(mv))?;
        if piece.color != self.board.side_to_move {
            return Err(EngineError::IllegalMove(mv));
        }
        self.board
            .find_king(piece.color)
            .ok_or(EngineError::NoKingFound(piece.color))?;

        let legal = self.board.legal_moves(mv.from);
        if !legal.contains(&mv) {
            // The destination itself is fine but the caller left the
            // promotion piece unset.
            if mv.promotion.is_none()
                && legal.iter().any(|m| m.from == mv.from && m.to == mv.to)
            {
                return Err(EngineError::PromotionRequired(mv));
            }
            return Err(EngineError::IllegalMove(mv));
        }

        let record = self.record_for(piece, mv);
        self.board.apply_move_unchecked(mv);
        self.status = self.board.status();
        self.history.push(record.clone());
        Ok(record)
    }

    /// Reverses the most recent move, restoring the prior castling rights
    /// and en passant window from its record.
    pub fn undo(&mut self) -> Result<MoveRecord, EngineError> {
        let record = self.history.pop().ok_or(EngineError::NothingToUndo)?;

        if record.is_castling {
            let rank = record.piece.color.back_rank();
            let (rook_from, rook_home) = if record.mv.to.file() == 6 {
                (Square::new(5, rank), Square::new(7, rank))
            } else {
                (Square::new(3, rank), Square::new(0, rank))
            };
            let rook = self.board.get_piece(rook_from);
            self.board.set_piece(rook_home, rook);
            self.board.set_piece(rook_from, None);
            self.board.set_piece(record.mv.from, Some(record.piece));
            self.board.set_piece(record.mv.to, None);
        } else {
            self.board.set_piece(record.mv.from, Some(record.piece));
            self.board.set_piece(record.mv.to, None);
            if let Some(square) = record.captured_square {
                self.board.set_piece(square, record.captured);
            }
        }

        self.board.castling_rights = record.prev_castling_rights;
        self.board.en_passant_target = record.prev_en_passant_target;
        self.board.en_passant_pawn = record.prev_en_passant_pawn;
        self.board.side_to_move = record.piece.color;
        self.status = self.board.status();
        Ok(record)
    }

    /// Rebuilds a game from an ordered move sequence, validating every
    /// move. The history alone is enough to reproduce any reachable state.
    pub fn replay<I>(moves: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = Move>,
    {
        let mut game = Game::new();
        for mv in moves {
            game.apply_move(mv)?;
        }
        Ok(game)
    }

    fn record_for(&self, piece: Piece, mv: Move) -> MoveRecord {
        let is_castling = self.board.is_castling_move(mv);
        let is_en_passant = self.board.is_en_passant_move(mv);
        let (captured, captured_square) = if is_en_passant {
            let victim = self.board.en_passant_pawn;
            (victim.and_then(|sq| self.board.get_piece(sq)), victim)
        } else {
            match self.board.get_piece(mv.to) {
                Some(taken) => (Some(taken), Some(mv.to)),
                None => (None, None),
            }
        };

        MoveRecord {
            mv,
            piece,
            captured,
            captured_square,
            is_castling,
            is_en_passant,
            notation: notation_for(piece, mv, captured.is_some(), is_castling),
            prev_castling_rights: self.board.castling_rights,
            prev_en_passant_target: self.board.en_passant_target,
            prev_en_passant_pawn: self.board.en_passant_pawn,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Move-list notation: `O-O`/`O-O-O` for castling, pawn moves like `e4`,
/// `exd5` and `e8=Q`, piece moves like `Nf3`/`Nxf3`. No disambiguation and
/// no check or mate suffixes.
fn notation_for(piece: Piece, mv: Move, is_capture: bool, is_castling: bool) -> String {
    if is_castling {
        return if mv.to.file() == 6 {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let mut notation = String::new();
    match piece.kind {
        PieceKind::Pawn => {
            if is_capture {
                notation.push((b'a' + mv.from.file()) as char);
                notation.push('x');
            }
            notation.push_str(&mv.to.to_string());
            if let Some(kind) = mv.promotion {
                notation.push('=');
                notation.push(kind.letter());
            }
        }
        _ => {
            notation.push(piece.kind.letter());
            if is_capture {
                notation.push('x');
            }
            notation.push_str(&mv.to.to_string());
        }
    }
    notation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn simple(from: &str, to: &str) -> Move {
        Move::new(square(from), square(to))
    }

    #[test]
    fn moves_off_the_legal_set_are_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.apply_move(simple("e2", "e5")),
            Err(EngineError::IllegalMove(simple("e2", "e5")))
        );
        // Right piece, wrong turn.
        assert_eq!(
            game.apply_move(simple("e7", "e5")),
            Err(EngineError::IllegalMove(simple("e7", "e5")))
        );
        // Empty square.
        assert!(game.apply_move(simple("e4", "e5")).is_err());
        assert!(game.history().is_empty());
    }

    #[test]
    fn applying_and_undoing_every_opening_move_restores_the_position() {
        let reference = Board::initial();
        for mv in reference.all_legal_moves(Color::White) {
            let mut game = Game::new();
            game.apply_move(mv).unwrap();
            game.undo().unwrap();
            assert_eq!(game.board(), &reference, "{mv}");
            assert_eq!(game.status(), GameStatus::InProgress);
            assert!(game.history().is_empty());
        }
    }

    #[test]
    fn undo_restores_the_previous_en_passant_window() {
        let mut game = Game::new();
        game.apply_move(simple("e2", "e4")).unwrap();
        assert_eq!(game.board().en_passant_target, Some(square("e3")));

        game.apply_move(simple("d7", "d5")).unwrap();
        assert_eq!(game.board().en_passant_target, Some(square("d6")));

        game.undo().unwrap();
        assert_eq!(game.board().en_passant_target, Some(square("e3")));
        assert_eq!(game.board().en_passant_pawn, Some(square("e4")));
    }

    #[test]
    fn en_passant_undo_puts_the_captured_pawn_back() {
        let mut game = Game::new();
        for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
            game.apply_move(simple(from, to)).unwrap();
        }
        let before = game.board().clone();
        game.apply_move(simple("e5", "d6")).unwrap();
        game.undo().unwrap();
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn castling_applies_and_undoes_both_piece_moves() {
        let start = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mut game = Game::from_board(start.clone());

        let record = game.apply_move(simple("e1", "g1")).unwrap();
        assert!(record.is_castling);
        assert_eq!(record.notation, "O-O");
        assert_eq!(
            game.board().get_piece(square("g1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            game.board().get_piece(square("f1")),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert!(!has_castling_right(game.board().castling_rights, WHITE_KINGSIDE));
        assert!(!has_castling_right(game.board().castling_rights, WHITE_QUEENSIDE));

        game.undo().unwrap();
        assert_eq!(game.board(), &start);
    }

    #[test]
    fn castling_rights_stay_cleared_when_a_later_move_is_undone() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mut game = Game::from_board(board);

        game.apply_move(simple("e1", "g1")).unwrap();
        game.apply_move(simple("a8", "a7")).unwrap();
        game.undo().unwrap();

        // Undoing black's unrelated rook move must not resurrect white's
        // rights, only black's.
        assert!(!has_castling_right(game.board().castling_rights, WHITE_KINGSIDE));
        assert!(!has_castling_right(game.board().castling_rights, WHITE_QUEENSIDE));
        assert!(has_castling_right(game.board().castling_rights, BLACK_QUEENSIDE));
    }

    #[test]
    fn promotion_needs_an_explicit_piece_choice() {
        let board = Board::from_fen("8/P7/8/8/8/8/8/K6k w - - 0 1").unwrap();
        let mut game = Game::from_board(board);

        let bare = simple("a7", "a8");
        assert_eq!(
            game.apply_move(bare),
            Err(EngineError::PromotionRequired(bare))
        );

        let promote = Move::new_promotion(square("a7"), square("a8"), PieceKind::Queen);
        let record = game.apply_move(promote).unwrap();
        assert_eq!(record.notation, "a8=Q");
        assert_eq!(
            game.board().get_piece(square("a8")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        // The new queen checks the bare king along the long diagonal.
        assert_eq!(game.status(), GameStatus::Check(Color::Black));

        game.undo().unwrap();
        assert_eq!(
            game.board().get_piece(square("a7")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(game.board().get_piece(square("a8")), None);
    }

    #[test]
    fn missing_king_is_reported_not_panicked() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R7 w - - 0 1").unwrap();
        let mut game = Game::from_board(board);
        assert_eq!(
            game.apply_move(simple("a1", "a2")),
            Err(EngineError::NoKingFound(Color::White))
        );
    }

    #[test]
    fn finished_games_reject_further_moves() {
        let mut game = Game::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            game.apply_move(simple(from, to)).unwrap();
        }
        assert!(game.status().is_game_over());
        assert!(game.apply_move(simple("a2", "a3")).is_err());
        // Undo reopens the game with black to move again.
        game.undo().unwrap();
        assert!(!game.status().is_game_over());
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.apply_move(simple("g8", "f6")).is_ok());
    }

    #[test]
    fn replay_reproduces_the_same_position() {
        let mut game = Game::new();
        let moves = [simple("e2", "e4"), simple("e7", "e5"), simple("g1", "f3")];
        for mv in moves {
            game.apply_move(mv).unwrap();
        }

        let replayed = Game::replay(moves).unwrap();
        assert_eq!(replayed.board(), game.board());
        assert_eq!(replayed.history().len(), 3);
        assert!(Game::replay([simple("e2", "e5")]).is_err());
    }

    #[test]
    fn notation_follows_the_move_list_dialect() {
        let mut game = Game::new();
        assert_eq!(game.apply_move(simple("e2", "e4")).unwrap().notation, "e4");
        assert_eq!(game.apply_move(simple("d7", "d5")).unwrap().notation, "d5");
        assert_eq!(game.apply_move(simple("e4", "d5")).unwrap().notation, "exd5");
        assert_eq!(game.apply_move(simple("g8", "f6")).unwrap().notation, "Nf6");
        assert_eq!(game.apply_move(simple("d5", "d6")).unwrap().notation, "d6");
        assert_eq!(game.apply_move(simple("f6", "e4")).unwrap().notation, "Ne4");
        assert_eq!(game.apply_move(simple("d6", "c7")).unwrap().notation, "dxc7");
    }

    #[test]
    fn empty_history_has_nothing_to_undo() {
        let mut game = Game::new();
        assert_eq!(game.undo(), Err(EngineError::NothingToUndo));
    }
}
