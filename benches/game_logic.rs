use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bloc::core::{Board, GameState, Piece, PieceController, SimpleRng};
use tui_bloc::term::{FrameBuffer, GameView, Viewport};
use tui_bloc::types::{Color, InputEvent, Rotation, LINE_CLEAR_TICKS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
            }
            state.tick();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(x, y, Color::Cyan);
                }
            }
            board.scan_full_rows(16, 19);
            for _ in 0..LINE_CLEAR_TICKS {
                black_box(board.advance_clear_animation());
            }
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut pieces = PieceController::new(&mut rng);
            black_box(pieces.hard_drop(&mut board, &mut rng));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut pieces = PieceController::with_pieces(
        Piece::at(Color::Purple, Rotation::North, (4, 8)),
        Piece::new(Color::Yellow, Rotation::North),
    );

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(pieces.rotate(&board, 1));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    for _ in 0..5 {
        state.handle(InputEvent::HardDrop);
    }
    let snap = state.snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_game_view", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
