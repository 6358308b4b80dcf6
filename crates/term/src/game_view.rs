//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board cells are two columns wide: `[]` for a block, ` .` for an empty
//! cell. The side panel sits two columns right of the frame.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell.
pub const CELL_W: u16 = 2;

const BLOCK: &str = "[]";
const EMPTY: &str = " .";

/// Width of the framed board, border included.
pub const FRAME_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
/// Height of the framed board, border included.
pub const FRAME_H: u16 = BOARD_HEIGHT as u16 + 2;
/// Columns reserved for the side panel ("Press q to quit" plus margin).
pub const PANEL_W: u16 = 17;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen positions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board frame.
    pub frame_x: u16,
    pub frame_y: u16,
    /// Left column of the side panel.
    pub panel_x: u16,
}

impl Layout {
    /// Terminal position of the left column of board cell `(x, y)`.
    pub fn cell_origin(&self, x: u16, y: u16) -> (u16, u16) {
        (self.frame_x + 1 + x * CELL_W, self.frame_y + 1 + y)
    }
}

/// Terminal renderer for the board, current piece and side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

/// Foreground color for a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::T => Rgb::new(205, 0, 205),
        PieceKind::O => Rgb::new(230, 230, 0),
        PieceKind::L => Rgb::new(60, 90, 240),
        PieceKind::J => Rgb::new(0, 205, 205),
        PieceKind::S => Rgb::new(0, 205, 0),
        PieceKind::I => Rgb::new(235, 235, 235),
        PieceKind::Z => Rgb::new(220, 40, 40),
    }
}

const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const GRID: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const ALERT: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Place the frame and panel so that both are centered together.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let total_w = FRAME_W + 2 + PANEL_W;
        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(FRAME_H) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            frame_x,
            frame_y,
            panel_x: frame_x + FRAME_W + 2,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized only
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);

        self.draw_border(fb, layout.frame_x, layout.frame_y, FRAME_W, FRAME_H);

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let (cx, cy) = layout.cell_origin(x as u16, y as u16);
                match PieceKind::from_code(code) {
                    Some(kind) => {
                        fb.put_str(cx, cy, BLOCK, CellStyle::fg(piece_color(kind)));
                    }
                    None => {
                        fb.put_str(cx, cy, EMPTY, GRID);
                    }
                }
            }
        }

        self.draw_current(fb, &layout, &snap.current);
        self.draw_side_panel(fb, snap, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    /// Overlay the falling piece; cells outside the board are not drawn.
    fn draw_current(&self, fb: &mut FrameBuffer, layout: &Layout, piece: &PieceSnapshot) {
        let style = CellStyle::fg(piece_color(piece.kind)).bold();
        for (x, y) in piece.cells() {
            if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                continue;
            }
            let (cx, cy) = layout.cell_origin(x as u16, y as u16);
            fb.put_str(cx, cy, BLOCK, style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let x = layout.panel_x;
        if x >= fb.width() {
            return;
        }

        let mut y = layout.frame_y;
        fb.put_str(x, y, "NEXT", LABEL);
        y += 1;

        // The next piece as its own matrix, top-left aligned.
        let style = CellStyle::fg(piece_color(snap.next.kind));
        for (dx, dy) in snap.next.matrix.occupied() {
            let px = x + dx as u16 * CELL_W;
            fb.put_str(px, y + dy as u16, BLOCK, style);
        }
        y += 5;

        for (label, value) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(x, y, label, LABEL);
            fb.put_u32(x, y + 1, value, VALUE);
            y += 3;
        }

        if snap.game_over {
            fb.put_str(x, y, "GAME OVER", ALERT);
            fb.put_str(x, y + 1, "Press q to quit", VALUE.dim());
        } else if snap.paused {
            fb.put_str(x, y, "PAUSED", ALERT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(FRAME_W + 2 + PANEL_W, FRAME_H)
    }

    #[test]
    fn layout_fills_exact_viewport() {
        let layout = GameView::default().layout(viewport());
        assert_eq!(layout.frame_x, 0);
        assert_eq!(layout.frame_y, 0);
        assert_eq!(layout.panel_x, FRAME_W + 2);
        assert_eq!(layout.cell_origin(0, 0), (1, 1));
        assert_eq!(layout.cell_origin(9, 19), (19, 20));
    }

    #[test]
    fn empty_cells_render_as_dots() {
        let mut snap = GameSnapshot::default();
        // Move the current piece out of the way of row 19.
        snap.current.y = 0;
        let fb = GameView::default().render(&snap, viewport());
        let row: String = fb.row_text(20).chars().take(FRAME_W as usize).collect();
        assert_eq!(row, "│ . . . . . . . . . .│");
    }

    #[test]
    fn locked_cells_use_kind_color() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = PieceKind::Z.code();
        let fb = GameView::default().render(&snap, viewport());

        let left = fb.get(1, 20).unwrap();
        let right = fb.get(2, 20).unwrap();
        assert_eq!((left.ch, right.ch), ('[', ']'));
        assert_eq!(left.style.fg, piece_color(PieceKind::Z));
    }

    #[test]
    fn undersized_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
