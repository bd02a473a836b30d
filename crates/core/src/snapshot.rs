use crate::controller::Piece;
use crate::types::{Color, Rotation, Score, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub color: Color,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            color: value.color,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Plain-data view of a game, enough for a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Color index per cell, 0 = empty
    pub board: [[u8; WIDTH]; HEIGHT],
    /// Rows currently drawn in the flash highlight
    pub flashing: [bool; HEIGHT],
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub score: Score,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; WIDTH]; HEIGHT],
            flashing: [false; HEIGHT],
            active: None,
            next: None,
            score: 0,
            level: 0,
            lines: 0,
            game_over: false,
        }
    }
}
