//! Board module - manages the game grid and the line-clear animation
//!
//! The board is a 10x20 grid where each cell is empty or holds a color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Full rows are not removed immediately. Each row has a countdown; a row
//! found full is armed with [`LINE_CLEAR_TICKS`] and flashes until the
//! countdown expires, then it is compacted away.

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH, FLASH_DIVISOR, LINE_CLEAR_TICKS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    /// Per-row clear countdown, 0 = not clearing
    line_ticks: [u32; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            line_ticks: [0; HEIGHT],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::off_board(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    #[inline(always)]
    fn off_board(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a block. The caller guarantees (x, y) is on the board.
    pub fn set_cell(&mut self, x: i8, y: i8, color: Color) {
        debug_assert!(!Self::off_board(x, y), "set_cell off board: ({x}, {y})");
        let idx = (y as usize) * WIDTH + (x as usize);
        self.cells[idx] = Some(color);
    }

    /// True iff the cell holds a block. Off-board cells are never occupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff (x, y) lies outside [0, WIDTH) x [0, HEIGHT)
    pub fn is_off_board(&self, x: i8, y: i8) -> bool {
        Self::off_board(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Remaining clear countdown of a row (0 if not clearing or out of range)
    pub fn line_ticks(&self, y: usize) -> u32 {
        self.line_ticks.get(y).copied().unwrap_or(0)
    }

    /// Whether a row is armed for removal
    pub fn is_clearing(&self, y: usize) -> bool {
        self.line_ticks(y) > 0
    }

    /// Whether a clearing row should currently be drawn highlighted.
    ///
    /// Phases alternate every [`FLASH_DIVISOR`] ticks, starting highlighted.
    pub fn is_flashing(&self, y: usize) -> bool {
        match self.line_ticks(y) {
            0 => false,
            ticks => ((ticks - 1) / FLASH_DIVISOR) % 2 == 0,
        }
    }

    /// Arm every full, not yet armed row in `row_start..=row_end`.
    ///
    /// The range is clamped to the board. Returns the number of rows newly
    /// armed (0..=4 when called with a piece's rows).
    pub fn scan_full_rows(&mut self, row_start: usize, row_end: usize) -> u32 {
        let end = row_end.min(HEIGHT - 1);
        let mut armed = 0;

        for y in row_start..=end {
            if self.line_ticks[y] == 0 && self.is_row_full(y) {
                self.line_ticks[y] = LINE_CLEAR_TICKS;
                armed += 1;
            }
        }

        armed
    }

    /// Advance every row's clear countdown by one tick and remove the rows
    /// that expire.
    ///
    /// Compaction is a single bottom-to-top pass with separate read and write
    /// cursors: expired rows are skipped, every surviving row is copied (with
    /// its own countdown) at most once, and the vacated top rows are emptied.
    /// Returns the number of rows removed.
    pub fn advance_clear_animation(&mut self) -> u32 {
        let mut write_y = HEIGHT;
        let mut removed = 0;

        for read_y in (0..HEIGHT).rev() {
            let ticks = &mut self.line_ticks[read_y];
            if *ticks > 0 {
                *ticks -= 1;
                if *ticks == 0 {
                    removed += 1;
                    continue;
                }
            }

            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
                self.line_ticks[write_y] = self.line_ticks[read_y];
            }
        }

        for y in 0..write_y {
            let start = y * WIDTH;
            self.cells[start..start + WIDTH].fill(None);
            self.line_ticks[y] = 0;
        }

        removed
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write color indices (0 = empty, 1..=7 = color) into a fixed grid.
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[start + x].map_or(0, |c| c.index() as u8);
            }
        }
    }

    /// Clear the entire board, including any pending row removals
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.line_ticks.fill(0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
