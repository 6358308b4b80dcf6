//! Pieces module - tetromino shape catalog, occupancy matrices and rotation
//!
//! Every shape is a small square occupancy matrix (row 0 on top). A piece owns its
//! own copy of the matrix, so rotating a piece never touches the catalog or any
//! other piece.
//!
//! Rotation is a pure matrix transform followed by horizontal kicks tried in the
//! fixed order of [`KICK_OFFSETS`]. There are no vertical kicks.

use crate::types::{PieceKind, RotateDir, BOARD_WIDTH, KICK_OFFSETS};

/// Largest matrix side in the catalog (the I piece)
pub const MAX_DIM: usize = 4;

/// Rectangular occupancy matrix with an inline 4x4 backing store.
///
/// Cells outside `width x height` are always `false`, so two matrices compare
/// equal exactly when their dimensions and occupied cells match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    width: u8,
    height: u8,
    /// `cells[row][col]`
    cells: [[bool; MAX_DIM]; MAX_DIM],
}

impl Matrix {
    /// Build a matrix from 0/1 rows. All rows must share one length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len() && r.len() <= MAX_DIM));

        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            width: rows[0].len() as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Occupancy at (row, col); out-of-range reads are empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.cells[row][col]
    }

    /// Occupied cells as `(dx, dy)` offsets from the top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |r| {
            (0..self.width as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rows trimmed to the matrix width, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells[..self.height as usize]
            .iter()
            .map(move |row| &row[..self.width as usize])
    }

    /// Rotate 90 degrees. Width and height swap.
    ///
    /// Clockwise is the transpose of the row-reversed matrix; counter-clockwise
    /// is the row-reversed transpose. The two are exact inverses.
    pub fn rotated(&self, dir: RotateDir) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_DIM]; MAX_DIM];

        // New matrix has `w` rows and `h` columns.
        for (r, out_row) in cells.iter_mut().enumerate().take(w) {
            for (c, out) in out_row.iter_mut().enumerate().take(h) {
                *out = match dir {
                    RotateDir::Clockwise => self.cells[h - 1 - c][r],
                    RotateDir::CounterClockwise => self.cells[c][w - 1 - r],
                };
            }
        }

        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Spawn orientation for a piece kind.
///
/// Returns a fresh value every call; callers own and may mutate it freely.
pub fn base_matrix(kind: PieceKind) -> Matrix {
    match kind {
        PieceKind::I => Matrix::from_rows(&[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
        PieceKind::J => Matrix::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::L => Matrix::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::O => Matrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => Matrix::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
        PieceKind::T => Matrix::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::Z => Matrix::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
    }
}

/// A piece instance: kind, owned orientation matrix and board position of the
/// matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in spawn orientation, horizontally centered on row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = base_matrix(kind);
        Self {
            kind,
            matrix,
            x: (BOARD_WIDTH as i8 - matrix.width() as i8) / 2,
            y: 0,
        }
    }

    pub fn width(&self) -> u8 {
        self.matrix.width()
    }

    pub fn height(&self) -> u8 {
        self.matrix.height()
    }

    /// Board coordinates of every occupied cell at the piece's own position.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.cells_at(self.x, self.y)
    }

    /// Board coordinates of every occupied cell if the piece sat at `(x, y)`.
    ///
    /// Matrix offsets are non-negative, so a saturated coordinate is always
    /// past the board edge and never reported as placeable.
    pub fn cells_at(&self, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
    }

    /// Same piece with its matrix rotated in place (position unchanged).
    pub fn rotated(&self, dir: RotateDir) -> Self {
        Self {
            matrix: self.matrix.rotated(dir),
            ..*self
        }
    }
}

/// Try to rotate a piece with horizontal kicks
///
/// Returns `Some((rotated_piece, kick_dx))` for the first offset in
/// [`KICK_OFFSETS`] that `fits` accepts, `None` if every offset fails. The input
/// piece is never modified, so a failed rotation leaves the caller's piece as it
/// was.
pub fn try_rotate(
    piece: &Piece,
    dir: RotateDir,
    fits: impl Fn(&Piece) -> bool,
) -> Option<(Piece, i8)> {
    let rotated = piece.rotated(dir);

    KICK_OFFSETS.iter().find_map(|&dx| {
        let candidate = Piece {
            x: rotated.x.saturating_add(dx),
            ..rotated
        };
        fits(&candidate).then_some((candidate, dx))
    })
}
