use crate::pieces::{Matrix, Piece};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only view of a piece for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

impl PieceSnapshot {
    /// Board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

/// Everything a renderer needs for one frame.
///
/// Board cells are kind codes (`PieceKind::code`), 0 for empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: Piece::spawn(PieceKind::I).into(),
            next: Piece::spawn(PieceKind::I).into(),
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
        }
    }
}
