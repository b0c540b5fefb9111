//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, score line, bordered board, key hints.
//! The whole block is centered in the viewport.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::palette::{tile_style, BOARD_BG, SCREEN_BG, SCREEN_TEXT};
use crate::types::GRID_SIZE;

/// Rows above the board (title, score).
const HEADER_H: u16 = 2;
/// Rows below the board (blank, hints).
const FOOTER_H: u16 = 2;

pub const TITLE: &str = "2048";
pub const HINTS: &str = "arrows move  r reset  q quit";

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

/// Screen position of the board's top-left corner (inside the gap border).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOrigin {
    pub x: u16,
    pub y: u16,
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Board-colored spacing around and between tiles.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits six-digit tiles with a little padding and keeps tiles roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16, gap: u16) -> Self {
        Self { cell_w, cell_h, gap }
    }

    /// Board size in terminal cells, including the outer gap.
    pub fn board_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (
            n * self.cell_w + (n + 1) * self.gap,
            n * self.cell_h + (n + 1) * self.gap,
        )
    }

    /// Where the board lands for a given viewport.
    pub fn board_origin(&self, viewport: Viewport) -> BoardOrigin {
        let (board_w, board_h) = self.board_size();
        let total_h = HEADER_H + board_h + FOOTER_H;
        let top = viewport.height.saturating_sub(total_h) / 2;
        BoardOrigin {
            x: viewport.width.saturating_sub(board_w) / 2,
            y: top + HEADER_H,
        }
    }

    /// Screen position of tile (row, col).
    pub fn tile_origin(&self, origin: BoardOrigin, row: usize, col: usize) -> (u16, u16) {
        let x = origin.x + self.gap + (col as u16) * (self.cell_w + self.gap);
        let y = origin.y + self.gap + (row as u16) * (self.cell_h + self.gap);
        (x, y)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        }
        let screen = CellStyle::new(SCREEN_TEXT, SCREEN_BG);
        fb.clear(Cell {
            ch: ' ',
            style: screen,
        });

        let (board_w, board_h) = self.board_size();
        let origin = self.board_origin(viewport);

        // Header.
        let title_y = origin.y.saturating_sub(HEADER_H);
        fb.put_str_centered(origin.x, title_y, board_w, TITLE, screen.bold());
        self.draw_score(fb, snap, origin, board_w, screen);

        // Board background, then tiles on top.
        fb.fill_rect(
            origin.x,
            origin.y,
            board_w,
            board_h,
            ' ',
            CellStyle::new(SCREEN_TEXT, BOARD_BG),
        );
        for (row, values) in snap.grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                self.draw_tile(fb, origin, row, col, value);
            }
        }

        // Footer.
        let hints_y = origin.y + board_h + 1;
        fb.put_str_centered(origin.x, hints_y, board_w, HINTS, screen);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_score(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        origin: BoardOrigin,
        board_w: u16,
        style: CellStyle,
    ) {
        let y = origin.y.saturating_sub(1);
        let mut line = format!("SCORE {}", snap.score);
        if snap.last_gain > 0 {
            line.push_str(&format!("  +{}", snap.last_gain));
        }
        fb.put_str(origin.x, y, &line, style.bold());

        let moves = format!("MOVES {}", snap.moves);
        let moves_x = (origin.x + board_w).saturating_sub(moves.chars().count() as u16);
        fb.put_str(moves_x, y, &moves, style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, origin: BoardOrigin, row: usize, col: usize, value: u32) {
        let (x, y) = self.tile_origin(origin, row, col);
        let style = tile_style(value);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        if value != 0 {
            let label = value.to_string();
            fb.put_str_centered(x, y + self.cell_h / 2, self.cell_w, &label, style);
        }
    }
}
