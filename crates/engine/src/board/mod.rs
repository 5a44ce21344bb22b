use crate::error::EngineError;
use crate::types::*;

pub mod debug;
pub mod moves;
pub mod state;
pub mod validation;

/// One position: occupancy plus the auxiliary state a position needs to be
/// played from. A plain value with no history attached, so speculative
/// exploration clones it and throws the clone away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling_rights: u8,
    /// Square a pawn skipped on its most recent two-square advance,
    /// capturable for exactly one move.
    pub en_passant_target: Option<Square>,
    /// Where that pawn actually stands (one rank behind the target).
    pub en_passant_pawn: Option<Square>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_target: None,
            en_passant_pawn: None,
        }
    }

    /// Standard starting position: white to move, all castling rights, no
    /// en passant target.
    pub fn initial() -> Self {
        use PieceKind::*;

        let mut board = Self::empty();
        board.castling_rights = ALL_CASTLING_RIGHTS;

        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (file, &kind) in back_rank.iter().enumerate() {
            let file = file as u8;
            board.set_piece(Square::new(file, 0), Some(Piece::new(kind, Color::White)));
            board.set_piece(Square::new(file, 7), Some(Piece::new(kind, Color::Black)));
        }
        for file in 0..8 {
            board.set_piece(Square::new(file, 1), Some(Piece::new(Pawn, Color::White)));
            board.set_piece(Square::new(file, 6), Some(Piece::new(Pawn, Color::Black)));
        }
        board
    }

    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.squares[square.0 as usize]
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.0 as usize] = piece;
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        (0..64).map(Square).find(|&sq| self.get_piece(sq) == Some(king))
    }

    /// Squares holding `color`'s pieces, in rank-major scan order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64).map(Square).filter_map(move |sq| {
            self.get_piece(sq)
                .filter(|piece| piece.color == color)
                .map(|piece| (sq, piece))
        })
    }

    /// Loads a position from the first four FEN fields (placement, side to
    /// move, castling rights, en passant target). Clock fields are accepted
    /// and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(EngineError::InvalidFen(
                "expected at least 4 fields".to_string(),
            ));
        }

        let mut board = Self::empty();
        board.parse_placement(parts[0])?;
        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(EngineError::InvalidFen(format!(
                    "bad side to move `{other}`"
                )))
            }
        };
        board.parse_castling(parts[2])?;
        board.parse_en_passant(parts[3])?;
        Ok(board)
    }

    fn parse_placement(&mut self, placement: &str) -> Result<(), EngineError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(EngineError::InvalidFen("expected 8 ranks".to_string()));
        }

        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file += skip as u8;
                } else {
                    if file >= 8 {
                        return Err(EngineError::InvalidFen(format!(
                            "rank {} overflows",
                            rank + 1
                        )));
                    }
                    let piece = piece_from_fen_char(ch).ok_or_else(|| {
                        EngineError::InvalidFen(format!("unknown piece `{ch}`"))
                    })?;
                    self.set_piece(Square::new(file, rank), Some(piece));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(EngineError::InvalidFen(format!(
                    "rank {} is incomplete",
                    rank + 1
                )));
            }
        }
        Ok(())
    }

    fn parse_castling(&mut self, field: &str) -> Result<(), EngineError> {
        if field == "-" {
            return Ok(());
        }
        for ch in field.chars() {
            match ch {
                'K' => self.castling_rights |= WHITE_KINGSIDE,
                'Q' => self.castling_rights |= WHITE_QUEENSIDE,
                'k' => self.castling_rights |= BLACK_KINGSIDE,
                'q' => self.castling_rights |= BLACK_QUEENSIDE,
                other => {
                    return Err(EngineError::InvalidFen(format!(
                        "bad castling flag `{other}`"
                    )))
                }
            }
        }
        Ok(())
    }

    fn parse_en_passant(&mut self, field: &str) -> Result<(), EngineError> {
        if field == "-" {
            return Ok(());
        }
        let target = Square::from_algebraic(field)
            .ok_or_else(|| EngineError::InvalidFen(format!("bad en passant square `{field}`")))?;
        let pawn_rank = match target.rank() {
            2 => 3,
            5 => 4,
            _ => {
                return Err(EngineError::InvalidFen(format!(
                    "en passant target `{field}` is not on rank 3 or 6"
                )))
            }
        };
        self.en_passant_target = Some(target);
        self.en_passant_pawn = Some(Square::new(target.file(), pawn_rank));
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    use PieceKind::*;

    let kind = match ch.to_ascii_lowercase() {
        'p' => Pawn,
        'n' => Knight,
        'b' => Bishop,
        'r' => Rook,
        'q' => Queen,
        'k' => King,
        _ => return None,
    };
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(Piece::new(kind, color))
}
