//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn two columns per cell inside a frame. The next piece is
//! drawn at its preview origin in board coordinates, which puts it to the
//! right of the frame, with the LEVEL / SCORE / LINES panel below it.

use crate::core::pieces::cells;
use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_POSITION};

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

pub(crate) const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_WIDTH: u16 = 12;

/// Foreground color of a block
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
    }
}

/// A lightweight terminal renderer for the game screen.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Top-left of the play area (inside the frame)
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Total width needed: frame, gap, preview and panel.
    pub fn required_size(&self) -> Viewport {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let preview_w = (PREVIEW_POSITION.0 as u16 + 4) * self.cell_w + 1;
        Viewport::new(
            preview_w.max(frame_w + 2 + PANEL_WIDTH),
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_px_h = BOARD_HEIGHT as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let need = self.required_size();
        let start_x = viewport.width.saturating_sub(need.width) / 2;
        let start_y = viewport.height.saturating_sub(need.height) / 2;
        let origin = Origin {
            x: start_x + 1,
            y: start_y + 1,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        fb.fill_rect(origin.x, origin.y, board_px_w, board_px_h, ' ', bg);
        fb.draw_box(start_x, start_y, frame_w, frame_h, CellStyle::default());

        // Locked blocks; clearing rows alternate with a highlight.
        for y in 0..BOARD_HEIGHT as usize {
            let flashing = snap.flashing[y];
            for x in 0..BOARD_WIDTH as usize {
                let cell = (x as u16, y as u16);
                match Color::from_index(snap.board[y][x] as usize) {
                    Some(_) if flashing => self.draw_flash_cell(fb, origin, cell),
                    Some(color) => self.draw_block(fb, origin, cell, color),
                    None => self.draw_empty_cell(fb, origin, cell),
                }
            }
        }

        if let Some(active) = snap.active {
            self.draw_piece(fb, origin, active, true);
        }
        if let Some(next) = snap.next {
            self.draw_piece(fb, origin, next, false);
        }

        self.draw_side_panel(fb, snap, origin, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw a piece at its board coordinates. Pieces on the board are
    /// clipped to it; the preview may lie anywhere.
    fn draw_piece(&self, fb: &mut FrameBuffer, origin: Origin, piece: PieceSnapshot, on_board: bool) {
        for (dx, dy) in cells(piece.color, piece.rotation) {
            let x = piece.x + dx;
            let y = piece.y + dy;
            if x < 0 || y < 0 {
                continue;
            }
            if on_board && (x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8) {
                continue;
            }
            self.draw_block(fb, origin, (x as u16, y as u16), piece.color);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, origin: Origin, cell: (u16, u16)) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, origin, cell, '·', style);
    }

    fn draw_flash_cell(&self, fb: &mut FrameBuffer, origin: Origin, cell: (u16, u16)) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PLAY_BG).bold();
        self.fill_cell_rect(fb, origin, cell, '█', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, cell: (u16, u16), color: Color) {
        let style = CellStyle::new(color_rgb(color), PLAY_BG).bold();
        self.fill_cell_rect(fb, origin, cell, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        (cell_x, cell_y): (u16, u16),
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.x + cell_x * self.cell_w;
        let py = origin.y + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: Origin, frame_w: u16) {
        let panel_x = origin.x - 1 + frame_w + 2;
        if panel_x >= fb.width() {
            return;
        }
        let right = panel_x + PANEL_WIDTH - 1;

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        // Below the preview piece.
        let mut y = origin.y + (PREVIEW_POSITION.1 as u16 + 5) * self.cell_h;
        for (name, v) in [
            ("LEVEL", u64::from(snap.level)),
            ("SCORE", snap.score),
            ("LINES", u64::from(snap.lines)),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_number_right(right, y + 1, v, value);
            y += 3;
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(start_x, mid_y, frame_w, text, style);
    }
}
