//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, bag generator and scoring. It
//! owns the current and next piece and exposes the mutating operations the driver
//! calls: horizontal moves, rotation, soft/hard drop, gravity ticks and pause.
//!
//! Illegal moves are not errors: every operation validates first and silently
//! leaves the state untouched when the rules forbid it.

use log::{debug, info};

use crate::{
    calculate_drop_score, calculate_level, calculate_line_score, drop_interval_ms, try_rotate,
    Board, Piece, PieceBag,
};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, RotateDir};

/// Session-level state machine
///
/// `Playing <-> Paused` via pause toggles, `Playing -> GameOver` on top-out.
/// `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    Paused,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    bag: PieceBag,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    paused: bool,
    game_over: bool,
    /// Timestamp (driver clock, ms) of the last gravity step
    last_drop_ms: u64,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The driver clock is expected to start at 0 together with the game.
    pub fn new(seed: u64) -> Self {
        Self::from_bag(PieceBag::new(seed))
    }

    /// Create a new game drawing pieces from `bag`
    pub fn from_bag(mut bag: PieceBag) -> Self {
        let current = bag.next_piece();
        let next = bag.next_piece();
        let level = calculate_level(0);

        Self {
            board: Board::new(),
            current,
            next,
            bag,
            score: 0,
            lines: 0,
            level,
            drop_interval_ms: drop_interval_ms(level),
            paused: false,
            game_over: false,
            last_drop_ms: 0,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_over {
            SessionPhase::GameOver
        } else if self.paused {
            SessionPhase::Paused
        } else {
            SessionPhase::Playing
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn last_drop_ms(&self) -> u64 {
        self.last_drop_ms
    }

    pub fn seed(&self) -> u64 {
        self.bag.seed()
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Check that every occupied cell of `piece` lands in bounds on an empty cell
    pub fn is_valid(&self, piece: &Piece) -> bool {
        self.is_valid_at(piece, piece.x, piece.y)
    }

    /// Same as [`GameState::is_valid`] with the piece moved to `(x, y)`
    pub fn is_valid_at(&self, piece: &Piece, x: i8, y: i8) -> bool {
        self.board.can_place(piece.cells_at(x, y))
    }

    /// Shift the current piece horizontally by `dx` if it fits
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if !self.playable() {
            return false;
        }

        let Some(x) = self.current.x.checked_add(dx) else {
            return false;
        };
        if !self.is_valid_at(&self.current, x, self.current.y) {
            return false;
        }
        self.current.x = x;
        true
    }

    /// Move down one row for a point; lock the piece when it cannot descend
    ///
    /// Returns true if the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }

        let y = self.current.y + 1;
        if self.is_valid_at(&self.current, self.current.x, y) {
            self.current.y = y;
            self.score = self.score.saturating_add(calculate_drop_score(1, false));
            true
        } else {
            self.lock_current();
            false
        }
    }

    /// Drop the current piece as far as it goes and lock it
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.playable() {
            return 0;
        }

        let mut rows = 0u32;
        while self.is_valid_at(&self.current, self.current.x, self.current.y + 1) {
            self.current.y += 1;
            rows += 1;
        }
        self.score = self.score.saturating_add(calculate_drop_score(rows, true));

        self.lock_current();
        rows
    }

    /// Rotate the current piece, trying horizontal kicks in fixed order
    ///
    /// All-or-nothing: if no kick fits, matrix and position stay as they were.
    pub fn rotate(&mut self, dir: RotateDir) -> bool {
        if !self.playable() {
            return false;
        }

        match try_rotate(&self.current, dir, |p| self.is_valid(p)) {
            Some((rotated, _kick)) => {
                self.current = rotated;
                true
            }
            None => false,
        }
    }

    /// Gravity step driven by the caller's monotonic clock (milliseconds)
    ///
    /// Once `drop_interval_ms` has elapsed since the last gravity step the
    /// piece falls one row, or locks if it cannot. Returns true when the
    /// interval elapsed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.playable() {
            return false;
        }
        if now_ms.saturating_sub(self.last_drop_ms) < u64::from(self.drop_interval_ms) {
            return false;
        }

        let y = self.current.y + 1;
        if self.is_valid_at(&self.current, self.current.x, y) {
            self.current.y = y;
        } else {
            self.lock_current();
        }
        self.last_drop_ms = now_ms;
        true
    }

    /// Flip the pause flag. Ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        debug!("paused = {}", self.paused);
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                if !self.playable() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.rotate(RotateDir::Clockwise),
            GameAction::RotateCcw => self.rotate(RotateDir::CounterClockwise),
            GameAction::TogglePause => self.toggle_pause(),
        }
    }

    /// Lock the current piece, clear rows and bring in the next piece
    fn lock_current(&mut self) {
        let piece = self.current;
        let written = self.board.lock_cells(piece.kind, piece.cells());
        debug!(
            "locked {:?} at ({}, {}), {} cells",
            piece.kind, piece.x, piece.y, written
        );

        self.clear_lines();

        self.current = self.next;
        self.next = self.bag.next_piece();

        if !self.is_valid(&self.current) {
            self.game_over = true;
            info!(
                "top out: {:?} cannot spawn (score {}, lines {}, level {})",
                self.current.kind, self.score, self.lines, self.level
            );
        }
    }

    /// Remove full rows and update lines, score, level and gravity
    ///
    /// Points use the level in effect before this clear. Level and gravity are
    /// only recomputed here.
    fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared == 0 {
            return 0;
        }

        let points = calculate_line_score(cleared, self.level);
        self.lines += cleared;
        self.score = self.score.saturating_add(points);
        info!("cleared {} line(s) for {} points", cleared, points);

        let level = calculate_level(self.lines);
        if level != self.level {
            info!("level {} -> {}", self.level, level);
        }
        self.level = level;
        self.drop_interval_ms = drop_interval_ms(level);

        cleared
    }

    /// Fill an existing snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.current = PieceSnapshot::from(self.current);
        out.next = PieceSnapshot::from(self.next);
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
