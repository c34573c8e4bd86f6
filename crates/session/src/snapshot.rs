use crate::core::{Board, Tetromino};
use crate::types::{PieceKind, BASE_DROP_MS};

/// Read-only copy of everything the front end draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<Tetromino>,
    pub ghost: Option<Tetromino>,
    pub next: Tetromino,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            active: None,
            ghost: None,
            next: Tetromino::new(PieceKind::I),
            started: false,
            paused: false,
            game_over: false,
            score: 0,
            level: 0,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
        }
    }
}
