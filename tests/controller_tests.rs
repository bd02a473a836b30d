//! Piece controller tests - movement, drops, locking and game over

use tui_bloc::core::{Board, LockOutcome, Piece, PieceController, SequenceRng, VerticalMove};
use tui_bloc::types::{AudioCue, Color, Rotation, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_POSITION};

fn controller(active: Piece) -> PieceController {
    PieceController::with_pieces(active, Piece::new(Color::Red, Rotation::North))
}

fn lowest_occupied_row(board: &Board) -> Option<i8> {
    (0..BOARD_HEIGHT as i8)
        .rev()
        .find(|&y| (0..BOARD_WIDTH as i8).any(|x| board.is_occupied(x, y)))
}

#[test]
fn test_move_right_at_wall_does_nothing() {
    let board = Board::new();
    let mut ctl = controller(Piece::new(Color::Purple, Rotation::North));

    let mut moves = 0;
    while ctl.move_horizontal(&board, 1) {
        moves += 1;
    }
    // T North spans columns 0..=2 of its box.
    assert_eq!(moves, 4);
    let before = ctl.active();
    assert!(!ctl.move_horizontal(&board, 1));
    assert_eq!(ctl.active(), before);
}

#[test]
fn test_hard_drop_on_empty_board_reaches_floor() {
    let mut board = Board::new();
    let mut rng = SequenceRng::new(vec![0]);
    let mut ctl = controller(Piece::new(Color::Purple, Rotation::North));

    let outcome = ctl.hard_drop(&mut board, &mut rng);

    assert_eq!(lowest_occupied_row(&board), Some(BOARD_HEIGHT as i8 - 1));
    // Two rows tall from row 0: falls 18.
    assert_eq!(outcome.drop_distance, 18);
    assert_eq!(
        outcome,
        LockOutcome {
            lines: 0,
            drop_distance: 18,
            game_over: false,
            cue: Some(AudioCue::Drop),
        }
    );
}

#[test]
fn test_hard_drop_stops_on_stack() {
    let mut board = Board::new();
    board.set_cell(4, 10, Color::Blue);
    let mut rng = SequenceRng::new(vec![0]);
    let mut ctl = controller(Piece::new(Color::Yellow, Rotation::North));

    let outcome = ctl.hard_drop(&mut board, &mut rng);
    assert_eq!(outcome.drop_distance, 8);
    assert!(board.is_occupied(4, 9));
    assert!(board.is_occupied(5, 8));
}

#[test]
fn test_lock_promotes_next_and_draws_new_next() {
    let mut board = Board::new();
    // Next draw: color 2 (Green), rotation 1 (East).
    let mut rng = SequenceRng::new(vec![2, 1]);
    let mut ctl = controller(Piece::new(Color::Yellow, Rotation::North));

    ctl.hard_drop(&mut board, &mut rng);

    let active = ctl.active();
    assert_eq!((active.color, active.rotation), (Color::Red, Rotation::North));
    assert_eq!((active.x, active.y), SPAWN_POSITION);
    assert_eq!(ctl.next().color, Color::Green);
    assert_eq!(ctl.next().rotation, Rotation::East);
}

#[test]
fn test_soft_step_moves_then_locks() {
    let mut board = Board::new();
    let mut rng = SequenceRng::new(vec![0]);
    let mut ctl = controller(Piece::at(Color::Yellow, Rotation::North, (3, 17)));

    assert_eq!(ctl.move_vertical(&mut board, &mut rng, 1), VerticalMove::Moved);
    match ctl.move_vertical(&mut board, &mut rng, 1) {
        VerticalMove::Locked(outcome) => assert_eq!(outcome.cue, None),
        VerticalMove::Moved => panic!("expected lock"),
    }
    assert!(board.is_occupied(4, 19));
}

#[test]
fn test_game_over_when_next_piece_collides_at_spawn() {
    let mut board = Board::new();
    for x in 3..7 {
        board.set_cell(x, 0, Color::Blue);
    }
    let mut rng = SequenceRng::new(vec![0]);
    let mut ctl = PieceController::with_pieces(
        Piece::at(Color::Yellow, Rotation::North, (-1, 10)),
        Piece::new(Color::Cyan, Rotation::North),
    );

    let outcome = ctl.hard_drop(&mut board, &mut rng);
    assert!(outcome.game_over);
    assert_eq!(outcome.cue, Some(AudioCue::GameOver));
}

#[test]
fn test_game_over_reports_no_lines() {
    let mut board = Board::new();
    for x in 2..10 {
        board.set_cell(x, 19, Color::Blue);
    }
    for x in 3..7 {
        board.set_cell(x, 0, Color::Blue);
    }
    let mut rng = SequenceRng::new(vec![0]);
    let mut ctl = PieceController::with_pieces(
        Piece::at(Color::Yellow, Rotation::North, (-1, 5)),
        Piece::new(Color::Cyan, Rotation::North),
    );

    let outcome = ctl.hard_drop(&mut board, &mut rng);
    assert!(outcome.game_over);
    assert_eq!(outcome.lines, 0);
    // The row still got armed on the board.
    assert!(board.is_clearing(19));
}

#[test]
fn test_line_cue_outranks_drop() {
    let mut board = Board::new();
    for x in 2..10 {
        board.set_cell(x, 19, Color::Blue);
    }
    let mut rng = SequenceRng::new(vec![0]);
    let mut ctl = controller(Piece::at(Color::Yellow, Rotation::North, (-1, 0)));

    let outcome = ctl.hard_drop(&mut board, &mut rng);
    assert_eq!(outcome.lines, 1);
    assert_eq!(outcome.cue, Some(AudioCue::LinesCleared));
}

#[test]
fn test_rotation_cycles_back_to_start() {
    let board = Board::new();
    let mut ctl = controller(Piece::at(Color::Purple, Rotation::North, (4, 5)));
    for _ in 0..4 {
        assert!(ctl.rotate(&board, 1));
    }
    assert_eq!(ctl.active().rotation, Rotation::North);
    assert!(ctl.rotate(&board, -1));
    assert_eq!(ctl.active().rotation, Rotation::West);
}

#[test]
fn test_rotation_blocked_by_stack_is_ignored() {
    let mut board = Board::new();
    // I East at x=4 covers column 5; North would need (4..=7, 5).
    board.set_cell(7, 5, Color::Red);
    let mut ctl = controller(Piece::at(Color::Cyan, Rotation::East, (4, 5)));
    assert!(!ctl.rotate(&board, 1));
    assert_eq!(ctl.active().rotation, Rotation::East);
}
