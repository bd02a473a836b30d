//! Piece controller - owns the active and next piece
//!
//! Every position or rotation change is checked against the board first.
//! Rejected moves are not errors: they simply leave the piece where it is.
//! When a piece cannot move down any further it locks: its blocks are copied
//! onto the board, the rows it covered are scanned for full lines, and the
//! next piece is promoted to the spawn origin.

use crate::board::Board;
use crate::pieces::{cells, random_color, random_rotation};
use crate::rng::PieceRng;
use crate::types::{AudioCue, Color, Rotation, PREVIEW_POSITION, SPAWN_POSITION};

/// A piece on (or next to) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn origin
    pub fn new(color: Color, rotation: Rotation) -> Self {
        Self::at(color, rotation, SPAWN_POSITION)
    }

    pub fn at(color: Color, rotation: Rotation, (x, y): (i8, i8)) -> Self {
        Self {
            color,
            rotation,
            x,
            y,
        }
    }

    fn random_at(rng: &mut impl PieceRng, origin: (i8, i8)) -> Self {
        let color = random_color(rng);
        let rotation = random_rotation(rng);
        Self::at(color, rotation, origin)
    }

    /// Absolute board positions of the piece's blocks
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        cells(self.color, self.rotation).map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// True if any block would be off the board at the given origin/rotation
    pub fn is_off_board_at(&self, board: &Board, x: i8, y: i8, rotation: Rotation) -> bool {
        cells(self.color, rotation).any(|(dx, dy)| board.is_off_board(x + dx, y + dy))
    }

    /// True if any block would overlap a locked block at the given origin/rotation
    pub fn collides_at(&self, board: &Board, x: i8, y: i8, rotation: Rotation) -> bool {
        cells(self.color, rotation).any(|(dx, dy)| board.is_occupied(x + dx, y + dy))
    }

    /// Legal = entirely on the board and not overlapping anything
    pub fn fits_at(&self, board: &Board, x: i8, y: i8, rotation: Rotation) -> bool {
        !self.is_off_board_at(board, x, y, rotation) && !self.collides_at(board, x, y, rotation)
    }

    /// Topmost and bottommost rows the piece covers
    pub fn row_span(&self) -> (i8, i8) {
        self.blocks()
            .fold((i8::MAX, i8::MIN), |(lo, hi), (_, y)| (lo.min(y), hi.max(y)))
    }
}

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    /// Rows newly armed for clearing (0 when the lock ended the game)
    pub lines: u32,
    /// Rows fallen by a hard drop before locking (0 for gravity locks)
    pub drop_distance: u32,
    /// The promoted piece collides at the spawn origin
    pub game_over: bool,
    pub cue: Option<AudioCue>,
}

/// Result of a downward move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMove {
    Moved,
    Locked(LockOutcome),
}

impl VerticalMove {
    /// Rows newly armed by this move
    pub fn lines(&self) -> u32 {
        match self {
            VerticalMove::Moved => 0,
            VerticalMove::Locked(outcome) => outcome.lines,
        }
    }
}

/// Active + next piece pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceController {
    active: Piece,
    next: Piece,
}

impl PieceController {
    /// Draw a random active piece at the spawn origin and a random next piece
    /// at the preview origin.
    pub fn new(rng: &mut impl PieceRng) -> Self {
        let active = Piece::random_at(rng, SPAWN_POSITION);
        let next = Piece::random_at(rng, PREVIEW_POSITION);
        Self { active, next }
    }

    /// Build a controller from explicit pieces
    pub fn with_pieces(active: Piece, next: Piece) -> Self {
        Self { active, next }
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    /// Shift the active piece one column left (-1) or right (+1).
    ///
    /// Returns whether the piece moved.
    pub fn move_horizontal(&mut self, board: &Board, direction: i8) -> bool {
        debug_assert!(direction == 1 || direction == -1);
        let p = self.active;
        if p.fits_at(board, p.x + direction, p.y, p.rotation) {
            self.active.x += direction;
            true
        } else {
            false
        }
    }

    /// Move the active piece down by `step` rows, locking it if it is blocked.
    pub fn move_vertical(
        &mut self,
        board: &mut Board,
        rng: &mut impl PieceRng,
        step: i8,
    ) -> VerticalMove {
        let p = self.active;
        if p.fits_at(board, p.x, p.y + step, p.rotation) {
            self.active.y += step;
            VerticalMove::Moved
        } else {
            VerticalMove::Locked(self.lock(board, rng, 0, false))
        }
    }

    /// Drop the active piece as far as it legally falls, then lock it.
    pub fn hard_drop(&mut self, board: &mut Board, rng: &mut impl PieceRng) -> LockOutcome {
        let distance = self.drop_distance(board);
        self.active.y += distance as i8;
        self.lock(board, rng, distance, true)
    }

    /// How many rows the active piece can fall from where it is
    pub fn drop_distance(&self, board: &Board) -> u32 {
        let p = self.active;
        let mut distance: i8 = 0;
        while p.fits_at(board, p.x, p.y + distance + 1, p.rotation) {
            distance += 1;
        }
        distance as u32
    }

    /// Rotate the active piece clockwise (+1) or counter-clockwise (-1).
    ///
    /// There is no kick search: the rotation applies only if the new
    /// orientation fits at the current origin. Returns whether it rotated.
    pub fn rotate(&mut self, board: &Board, direction: i8) -> bool {
        let p = self.active;
        let rotation = p.rotation.rotate(direction);
        if p.fits_at(board, p.x, p.y, rotation) {
            self.active.rotation = rotation;
            true
        } else {
            false
        }
    }

    fn lock(
        &mut self,
        board: &mut Board,
        rng: &mut impl PieceRng,
        drop_distance: u32,
        hard: bool,
    ) -> LockOutcome {
        let locked = self.active;
        for (x, y) in locked.blocks() {
            board.set_cell(x, y, locked.color);
        }

        let (top, bottom) = locked.row_span();
        let lines = board.scan_full_rows(top.max(0) as usize, bottom.max(0) as usize);

        self.promote_next(rng);

        let spawned = self.active;
        let game_over = spawned.collides_at(board, spawned.x, spawned.y, spawned.rotation);

        let cue = if game_over {
            Some(AudioCue::GameOver)
        } else if lines > 0 {
            Some(AudioCue::LinesCleared)
        } else if hard {
            Some(AudioCue::Drop)
        } else {
            None
        };

        LockOutcome {
            lines: if game_over { 0 } else { lines },
            drop_distance,
            game_over,
            cue,
        }
    }

    fn promote_next(&mut self, rng: &mut impl PieceRng) {
        self.active = Piece::new(self.next.color, self.next.rotation);
        self.next = Piece::random_at(rng, PREVIEW_POSITION);
    }
}
