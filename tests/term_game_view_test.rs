use tui_bloc::core::{GameSnapshot, GameState};
use tui_bloc::term::game_view::color_rgb;
use tui_bloc::term::{FrameBuffer, GameView, MenuView, Viewport};
use tui_bloc::types::Color;

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row(y).iter().map(|c| c.ch).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = Color::Cyan.index() as u8;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 22));

    for x in 1..=2 {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(Color::Cyan));
    }
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece() {
    let snap = GameState::new(1).snapshot();
    let active = snap.active.unwrap();
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 22));

    let blocks = (0..fb.height())
        .flat_map(|y| fb.row(y).iter())
        .filter(|c| c.ch == '█' && c.style.fg == color_rgb(active.color))
        .count();
    // Four blocks, two columns each. The preview is clipped off this viewport.
    assert_eq!(blocks, 8);
}

#[test]
fn term_view_shows_game_over_and_score() {
    let snap = GameSnapshot {
        score: 4321,
        level: 3,
        lines: 12,
        game_over: true,
        ..GameSnapshot::default()
    };
    let view = GameView::default();
    let fb = view.render(&snap, view.required_size());
    let text = screen_text(&fb);

    assert!(text.contains("GAME OVER"));
    assert!(text.contains("4321"));
    assert!(text.contains("12"));
}

#[test]
fn message_box_overlays_game_screen() {
    let snap = GameSnapshot::default();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(60, 24));
    MenuView::new().draw_message_box(&mut fb, "Game over! Press Return");
    assert!(screen_text(&fb).contains("Game over! Press Return"));
}
