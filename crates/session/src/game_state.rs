//! Game state module - the single-writer session container
//!
//! `GameState` owns everything one game needs (board, current and next piece,
//! score, lines, level, flags, gravity timer) and drives the pure rules engine.
//! The terminal loop owns one `GameState` and feeds it intents and elapsed
//! time sequentially, so input and gravity always act on the latest state.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{
    calculate_level, calculate_score, clear_lines, get_completed_lines, get_drop_speed,
    ghost_piece, hard_drop, is_game_over, move_piece, place_tetromino, random_piece_with,
    rotate_piece, Board, CompletedLines, Tetromino,
};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction};

/// What happened when the active piece locked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockOutcome {
    /// Rows removed by this lock, increasing (indices before compaction)
    pub cleared_rows: CompletedLines,
    /// Points awarded for the clear
    pub score_gained: u32,
    /// Whether the following spawn was blocked
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Tetromino>,
    next: Tetromino,
    rng: StdRng,
    seed: u64,
    score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    started: bool,
    last_lock: Option<LockOutcome>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The first current and next pieces are drawn immediately; gravity and
    /// intents stay inert until [`GameState::start`].
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let current = random_piece_with(&mut rng);
        let next = random_piece_with(&mut rng);

        Self {
            board: Board::new(),
            current: Some(current),
            next,
            rng,
            seed,
            score: 0,
            level: 0,
            lines: 0,
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            started: false,
            last_lock: None,
        }
    }

    /// Start the game
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        tracing::info!(seed = self.seed, "game started");
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether intents and gravity currently act on the piece
    pub fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece; `None` once the game is over
    pub fn active(&self) -> Option<Tetromino> {
        self.current
    }

    /// Lookahead piece that spawns after the current one locks
    pub fn next_piece(&self) -> Tetromino {
        self.next
    }

    /// Landing preview of the active piece
    pub fn ghost(&self) -> Option<Tetromino> {
        self.current.map(|piece| ghost_piece(&self.board, &piece))
    }

    /// Outcome of the most recent lock, if any
    pub fn last_lock(&self) -> Option<&LockOutcome> {
        self.last_lock.as_ref()
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_speed(self.level)
    }

    /// Milliseconds accumulated toward the next gravity step
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    /// Replace the board, e.g. to set up a scenario.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Replace the active piece, e.g. to set up a scenario.
    pub fn set_active(&mut self, piece: Tetromino) {
        self.current = Some(piece);
    }

    /// Replace the lookahead piece, e.g. to set up a scenario.
    pub fn set_next(&mut self, piece: Tetromino) {
        self.next = piece;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board;
        out.active = self.current;
        out.ghost = self.ghost();
        out.next = self.next;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Try to move the active piece one cell
    fn try_move(&mut self, direction: Direction) -> bool {
        let Some(active) = self.current else {
            return false;
        };

        let moved = move_piece(&self.board, &active, direction);
        self.current = Some(moved);
        moved != active
    }

    /// Try to rotate the active piece clockwise
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.current else {
            return false;
        };

        let rotated = rotate_piece(&self.board, &active);
        self.current = Some(rotated);
        rotated != active
    }

    /// Drop the active piece to its landing row.
    ///
    /// The piece does not lock here; the next gravity step finds it resting
    /// and locks it.
    fn drop_to_floor(&mut self) -> bool {
        let Some(active) = self.current else {
            return false;
        };

        let dropped = hard_drop(&self.board, &active);
        self.current = Some(dropped);
        dropped != active
    }

    /// Apply a player intent. Returns whether the state changed.
    ///
    /// Restart is honoured on the title screen, after game over and while
    /// paused. It is ignored while a game is running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                if self.playable() {
                    return false;
                }
                self.restart();
                true
            }
            GameAction::Pause => {
                if !self.started || self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                tracing::debug!(paused = self.paused, "pause toggled");
                true
            }
            _ if !self.playable() => false,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop => action
                .direction()
                .is_some_and(|direction| self.try_move(direction)),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => self.drop_to_floor(),
        }
    }

    /// Start over with a fresh board, keeping the RNG stream
    pub fn restart(&mut self) {
        let current = random_piece_with(&mut self.rng);
        let next = random_piece_with(&mut self.rng);

        self.board = Board::new();
        self.current = Some(current);
        self.next = next;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.drop_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.last_lock = None;

        tracing::info!(seed = self.seed, "new game");
    }

    /// Main game tick - advance the gravity timer
    ///
    /// Performs one gravity step each time the accumulated time reaches the
    /// current drop interval. Returns the lock outcome if a step locked the
    /// piece.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<LockOutcome> {
        if !self.playable() {
            return None;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        let mut outcome = None;

        while self.playable() && self.drop_timer_ms >= self.drop_interval_ms() {
            self.drop_timer_ms -= self.drop_interval_ms();
            if let Some(lock) = self.step_down() {
                outcome = Some(lock);
            }
        }

        outcome
    }

    /// One gravity step: move down, or lock if the piece is resting
    pub fn step_down(&mut self) -> Option<LockOutcome> {
        if !self.playable() {
            return None;
        }
        if self.try_move(Direction::Down) {
            return None;
        }
        Some(self.lock_piece())
    }

    /// Lock the active piece, clear lines, score, and spawn the next piece
    fn lock_piece(&mut self) -> LockOutcome {
        let Some(active) = self.current.take() else {
            return LockOutcome {
                cleared_rows: CompletedLines::new(),
                score_gained: 0,
                game_over: self.game_over,
            };
        };

        let placed = place_tetromino(&self.board, &active);
        let cleared_rows = get_completed_lines(&placed);
        self.board = clear_lines(&placed, &cleared_rows);

        tracing::debug!(kind = ?active.kind, x = active.x, y = active.y, "piece locked");

        let mut score_gained = 0;
        if !cleared_rows.is_empty() {
            let count = cleared_rows.len();
            score_gained = calculate_score(count, self.level);
            self.score = self.score.saturating_add(score_gained);
            self.lines = self.lines.saturating_add(count as u32);

            let previous_level = self.level;
            self.level = calculate_level(self.lines);

            tracing::info!(
                rows = ?cleared_rows.as_slice(),
                score_gained,
                total = self.score,
                "lines cleared"
            );
            if self.level != previous_level {
                tracing::info!(
                    level = self.level,
                    drop_ms = self.drop_interval_ms(),
                    "level up"
                );
            }
        }

        // Spawn next piece; a blocked spawn stays on show as the preview
        let spawned = self.next;

        if is_game_over(&self.board, &spawned) {
            self.game_over = true;
            tracing::info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                "game over"
            );
        } else {
            self.current = Some(spawned);
            self.next = random_piece_with(&mut self.rng);
        }

        let outcome = LockOutcome {
            cleared_rows,
            score_gained,
            game_over: self.game_over,
        };
        self.last_lock = Some(outcome.clone());
        outcome
    }
}
