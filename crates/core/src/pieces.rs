//! Pieces module - the static piece catalogue
//!
//! Every (color, rotation) pair maps to a fixed 4x4 mask. Rotation is a plain
//! table lookup: there is no pivot geometry and no wall-kick search, so a
//! rotation either fits where the piece already is or it does not happen.

use crate::rng::PieceRng;
use crate::types::{Color, Rotation, PIECE_SIZE};

/// Occupancy of a piece's 4x4 bounding box, indexed `[row][col]`
pub type Mask = [[bool; PIECE_SIZE]; PIECE_SIZE];

/// Offset of a single block relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Catalogue slots: the reserved empty slot plus the seven colors
pub const COLOR_SLOTS: usize = 8;

/// Number of orientations per color
pub const ROTATIONS: usize = 4;

const fn parse_mask(rows: [&str; PIECE_SIZE]) -> Mask {
    let mut out = [[false; PIECE_SIZE]; PIECE_SIZE];
    let mut y = 0;
    while y < PIECE_SIZE {
        let bytes = rows[y].as_bytes();
        let mut x = 0;
        while x < PIECE_SIZE {
            out[y][x] = bytes[x] == b'#';
            x += 1;
        }
        y += 1;
    }
    out
}

const EMPTY: Mask = [[false; PIECE_SIZE]; PIECE_SIZE];

/// Shape table indexed by `[color slot][rotation]`.
///
/// Slot 0 is the empty pseudo-color; it keeps indexing uniform with the
/// board's color indices and never belongs to a live piece.
pub static CATALOGUE: [[Mask; ROTATIONS]; COLOR_SLOTS] = [
    // empty
    [EMPTY, EMPTY, EMPTY, EMPTY],
    // blue (J)
    [
        parse_mask(["###.", "..#.", "....", "...."]),
        parse_mask([".#..", ".#..", "##..", "...."]),
        parse_mask(["#...", "###.", "....", "...."]),
        parse_mask(["##..", "#...", "#...", "...."]),
    ],
    // cyan (I)
    [
        parse_mask(["####", "....", "....", "...."]),
        parse_mask([".#..", ".#..", ".#..", ".#.."]),
        parse_mask(["####", "....", "....", "...."]),
        parse_mask([".#..", ".#..", ".#..", ".#.."]),
    ],
    // green (S)
    [
        parse_mask([".##.", "##..", "....", "...."]),
        parse_mask(["#...", "##..", ".#..", "...."]),
        parse_mask([".##.", "##..", "....", "...."]),
        parse_mask(["#...", "##..", ".#..", "...."]),
    ],
    // purple (T)
    [
        parse_mask(["###.", ".#..", "....", "...."]),
        parse_mask([".#..", "##..", ".#..", "...."]),
        parse_mask([".#..", "###.", "....", "...."]),
        parse_mask(["#...", "##..", "#...", "...."]),
    ],
    // red (Z)
    [
        parse_mask(["##..", ".##.", "....", "...."]),
        parse_mask([".#..", "##..", "#...", "...."]),
        parse_mask(["##..", ".##.", "....", "...."]),
        parse_mask([".#..", "##..", "#...", "...."]),
    ],
    // orange (L)
    [
        parse_mask(["###.", "#...", "....", "...."]),
        parse_mask(["##..", ".#..", ".#..", "...."]),
        parse_mask(["..#.", "###.", "....", "...."]),
        parse_mask(["#...", "#...", "##..", "...."]),
    ],
    // yellow (O)
    [
        parse_mask([".##.", ".##.", "....", "...."]),
        parse_mask([".##.", ".##.", "....", "...."]),
        parse_mask([".##.", ".##.", "....", "...."]),
        parse_mask([".##.", ".##.", "....", "...."]),
    ],
];

/// The 4x4 mask for a color and rotation
pub fn mask(color: Color, rotation: Rotation) -> &'static Mask {
    &CATALOGUE[color.index()][rotation.index()]
}

/// Occupied offsets of a color and rotation, in row-major order
pub fn cells(color: Color, rotation: Rotation) -> impl Iterator<Item = MinoOffset> {
    let m = mask(color, rotation);
    (0..PIECE_SIZE).flat_map(move |y| {
        (0..PIECE_SIZE)
            .filter(move |&x| m[y][x])
            .map(move |x| (x as i8, y as i8))
    })
}

/// Get the shape (block offsets) for a color and rotation
pub fn get_shape(color: Color, rotation: Rotation) -> PieceShape {
    let mut shape = [(0, 0); 4];
    let mut n = 0;
    for offset in cells(color, rotation) {
        shape[n] = offset;
        n += 1;
    }
    debug_assert_eq!(n, 4, "every catalogue shape has four blocks");
    shape
}

/// Uniformly random real color (never the empty slot)
pub fn random_color(rng: &mut impl PieceRng) -> Color {
    Color::ALL[rng.next_below(Color::ALL.len() as u32) as usize]
}

/// Uniformly random orientation
pub fn random_rotation(rng: &mut impl PieceRng) -> Rotation {
    Rotation::ALL[rng.next_below(ROTATIONS as u32) as usize]
}
