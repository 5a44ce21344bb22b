use std::fs;
use std::io;
use std::path::Path;

use crate::types::{DrawReason, GameStatus, MoveRecord};

/// Buffered game log. The session layer appends entries as the game
/// progresses, then reads the buffer back for display or saves it to a
/// file when the game ends.
#[derive(Debug)]
pub struct GameLogger {
    buffer: String,
    half_moves: u32,
}

impl GameLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            buffer: String::with_capacity(16 * 1024),
            half_moves: 0,
        };
        logger.log("=== Game log ===");
        logger.log(&format!(
            "Date: {}",
            chrono::Local::now().format("%m/%d/%Y %H:%M:%S")
        ));
        logger
    }

    pub fn log(&mut self, message: &str) {
        self.buffer.push_str(message);
        self.buffer.push('\n');
    }

    /// Numbered move entry: `1. e4` for white, `1... e5` for black.
    pub fn log_move(&mut self, record: &MoveRecord) {
        let prefix = self.next_move_prefix();
        self.log(&format!("{prefix} {}", record.notation));
    }

    /// Engine move entry with the search verdict attached.
    pub fn log_engine_move(&mut self, record: &MoveRecord, evaluation: i32, depth: u32) {
        let prefix = self.next_move_prefix();
        self.log(&format!(
            "{prefix} {} (engine depth {depth}, eval {evaluation})",
            record.notation
        ));
    }

    pub fn log_undo(&mut self, record: &MoveRecord) {
        self.half_moves = self.half_moves.saturating_sub(1);
        self.log(&format!("undo {}", record.notation));
    }

    pub fn log_game_end(&mut self, status: GameStatus) {
        match status {
            GameStatus::Checkmate(winner) => self.log(&format!("{winner} wins by checkmate")),
            GameStatus::Stalemate => self.log("Draw by stalemate"),
            GameStatus::Draw(DrawReason::InsufficientMaterial) => {
                self.log("Draw by insufficient material")
            }
            GameStatus::InProgress | GameStatus::Check(_) => {}
        }
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub fn save_to_file(&self, path: &Path) -> io::Result<()> {
        fs::write(path, &self.buffer)
    }

    fn next_move_prefix(&mut self) -> String {
        self.half_moves += 1;
        let number = (self.half_moves + 1) / 2;
        if self.half_moves % 2 == 1 {
            format!("{number}.")
        } else {
            format!("{number}...")
        }
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}
