//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or tagged with the kind of
//! the piece that was locked there (the tag drives render color).
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear pass
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from text rows, top to bottom (`.` empty, piece letter filled).
    ///
    /// Missing rows at the top are empty, so callers only describe the stack.
    /// Unknown characters count as empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (i, row) in rows.iter().enumerate().take(BOARD_HEIGHT as usize) {
            let y = (offset + i) as i8;
            for (x, ch) in row.chars().enumerate().take(BOARD_WIDTH as usize) {
                board.set(x as i8, y, PieceKind::from_char(ch));
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True when every given cell is in bounds and empty.
    pub fn can_place(&self, mut cells: impl Iterator<Item = (i8, i8)>) -> bool {
        cells.all(|(x, y)| self.is_valid(x, y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Number of rows holding at least one block
    pub fn occupied_row_count(&self) -> usize {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.row(y).is_some_and(|row| row.iter().any(|c| c.is_some())))
            .count()
    }

    /// Number of filled cells on the whole board
    pub fn filled_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Remaining rows keep their relative order and settle at the bottom; the
    /// same number of empty rows appear at the top. Two-pointer pass, no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Blank the rows freed at the top
        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Write piece cells onto the board tagged with `kind`.
    ///
    /// Out-of-bounds cells are skipped. Returns how many cells were written.
    pub fn lock_cells(&mut self, kind: PieceKind, cells: impl Iterator<Item = (i8, i8)>) -> usize {
        cells
            .filter(|&(x, y)| self.set(x, y, Some(kind)))
            .count()
    }

    /// Export cells as kind codes (0 = empty) into a row-major grid.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[start + x].map(PieceKind::code).unwrap_or(0);
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
