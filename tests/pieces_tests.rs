//! Piece catalogue tests

use tui_bloc::core::pieces::{cells, mask, CATALOGUE};
use tui_bloc::core::{get_shape, Board, Piece};
use tui_bloc::types::{Color, Rotation, SPAWN_POSITION};

#[test]
fn test_every_piece_fits_at_spawn_on_empty_board() {
    let board = Board::new();
    let (sx, sy) = SPAWN_POSITION;
    for color in Color::ALL {
        for rotation in Rotation::ALL {
            let piece = Piece::new(color, rotation);
            assert!(
                piece.fits_at(&board, sx, sy, rotation),
                "{:?} {:?} should fit at spawn",
                color,
                rotation
            );
        }
    }
}

#[test]
fn test_catalogue_has_eight_slots_of_four_rotations() {
    assert_eq!(CATALOGUE.len(), 8);
    for slot in &CATALOGUE[1..] {
        for m in slot {
            assert_eq!(m.iter().flatten().filter(|&&b| b).count(), 4);
        }
    }
}

#[test]
fn test_two_state_pieces_repeat() {
    for color in [Color::Cyan, Color::Green, Color::Red] {
        assert_eq!(
            mask(color, Rotation::North),
            mask(color, Rotation::South),
            "{:?}",
            color
        );
        assert_eq!(mask(color, Rotation::East), mask(color, Rotation::West));
    }
    for rotation in Rotation::ALL {
        assert_eq!(mask(Color::Yellow, rotation), mask(Color::Yellow, Rotation::North));
    }
}

#[test]
fn test_i_piece_shapes() {
    assert_eq!(
        get_shape(Color::Cyan, Rotation::North),
        [(0, 0), (1, 0), (2, 0), (3, 0)]
    );
    assert_eq!(
        get_shape(Color::Cyan, Rotation::East),
        [(1, 0), (1, 1), (1, 2), (1, 3)]
    );
}

#[test]
fn test_four_state_pieces_differ_per_rotation() {
    for color in [Color::Blue, Color::Purple, Color::Orange] {
        for a in 0..4 {
            for b in a + 1..4 {
                assert_ne!(
                    mask(color, Rotation::from_index(a)),
                    mask(color, Rotation::from_index(b)),
                    "{:?} {} vs {}",
                    color,
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_cells_are_row_major() {
    let offsets: Vec<_> = cells(Color::Orange, Rotation::South).collect();
    assert_eq!(offsets, vec![(2, 0), (0, 1), (1, 1), (2, 1)]);
}
