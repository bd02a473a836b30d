//! Main menu, instructions, high score screen and message boxes.
//!
//! Like [`crate::GameView`], everything here only writes into a
//! [`FrameBuffer`].

use crate::core::HighScoreTable;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NewGame,
    Instructions,
    HighScores,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::NewGame,
        MenuItem::Instructions,
        MenuItem::HighScores,
        MenuItem::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::NewGame => "New game",
            MenuItem::Instructions => "Instructions",
            MenuItem::HighScores => "High scores",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Menu cursor. Moving past either end wraps around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Menu {
    cursor: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn up(&mut self) {
        let n = MenuItem::ALL.len();
        self.cursor = (self.cursor + n - 1) % n;
    }

    pub fn down(&mut self) {
        self.cursor = (self.cursor + 1) % MenuItem::ALL.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.cursor]
    }
}

pub const INSTRUCTIONS: &str = "\
Fit the shapes together to make
full lines. Full lines are cleared
and score points.

Move the falling shape with the
left and right arrow keys. Rotate
the shape with the up arrow key.

Use the space bar to \"hard drop\"
the shape into place for extra
points! Use the down arrow key to
speed up the falling shape.

The falling shapes gradually speed
up but you get bigger scores too!
Press escape to quit the game
early. The game ends when the next
piece will not fit onto the board.

Up arrow    - rotate
Left arrow  - move left
Right arrow - move right
Down arrow  - soft drop
Space bar   - hard drop
Escape      - quit";

const TITLE: &str = "B L O C";
const SCORE_WIDTH: usize = 11;

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_menu_into(&self, menu: &Menu, viewport: Viewport, fb: &mut FrameBuffer) {
        Self::reset(fb, viewport);
        let title = CellStyle::new(Rgb::new(240, 220, 80), Rgb::new(0, 0, 0)).bold();
        let item = CellStyle::default();
        let selected = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(220, 220, 220)).bold();

        let rows = MenuItem::ALL.len() as u16 * 2 + 2;
        let mut y = viewport.height.saturating_sub(rows) / 2;
        fb.put_str_centered(0, y, viewport.width, TITLE, title);
        y += 3;

        for (i, entry) in MenuItem::ALL.iter().enumerate() {
            let style = if i == menu.cursor() { selected } else { item };
            let label = entry.label();
            fb.put_str_centered(0, y, viewport.width, label, style);
            if i == menu.cursor() {
                let x = viewport.width.saturating_sub(label.len() as u16) / 2;
                fb.put_str(x.saturating_sub(2), y, ">", item.bold());
            }
            y += 2;
        }
    }

    pub fn render_instructions_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        Self::reset(fb, viewport);
        let lines = INSTRUCTIONS.lines().count() as u16;
        let width = INSTRUCTIONS.lines().map(|l| l.len()).max().unwrap_or(0) as u16;
        let x = viewport.width.saturating_sub(width) / 2;
        let mut y = viewport.height.saturating_sub(lines + 2) / 2;
        for line in INSTRUCTIONS.lines() {
            fb.put_str(x, y, line, CellStyle::default());
            y += 1;
        }
        let hint = CellStyle::default().dim();
        fb.put_str_centered(0, y + 1, viewport.width, "Press any key", hint);
    }

    pub fn render_high_scores_into(
        &self,
        table: &HighScoreTable,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        Self::reset(fb, viewport);
        let heading = CellStyle::default().bold();
        let rows = table.entries().len() as u16 * 2 + 2;
        let mut y = viewport.height.saturating_sub(rows) / 2;
        fb.put_str_centered(0, y, viewport.width, "HIGH SCORES", heading);
        y += 2;

        let row_w = (SCORE_WIDTH + 1 + crate::types::MAX_NAME_LEN) as u16;
        let x = viewport.width.saturating_sub(row_w) / 2;
        for entry in table.entries() {
            fb.put_number_right(x + SCORE_WIDTH as u16 - 1, y, entry.score, CellStyle::default());
            fb.put_str(x + SCORE_WIDTH as u16 + 1, y, &entry.name, CellStyle::default());
            y += 2;
        }
    }

    /// Draw a boxed one-line message centered over whatever `fb` holds.
    pub fn draw_message_box(&self, fb: &mut FrameBuffer, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 40, 80));
        let border = style.bold();
        let w = text.chars().count() as u16 + 4;
        let h = 3;
        let x = fb.width().saturating_sub(w) / 2;
        let y = fb.height().saturating_sub(h) / 2;
        fb.fill_rect(x, y, w, h, ' ', style);
        fb.draw_box(x, y, w, h, border);
        fb.put_str(x + 2, y + 1, text, style);
    }

    /// Message box for typing a high score name
    pub fn draw_name_entry(&self, fb: &mut FrameBuffer, name: &str) {
        let mut text = String::with_capacity(crate::types::MAX_NAME_LEN + 13);
        text.push_str("Enter name: ");
        text.push_str(name);
        // Keep the box width stable while typing.
        while text.len() < crate::types::MAX_NAME_LEN + 13 {
            text.push(if text.len() == 12 + name.len() { '_' } else { ' ' });
        }
        self.draw_message_box(fb, &text);
    }

    fn reset(fb: &mut FrameBuffer, viewport: Viewport) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row(y).iter().map(|c| c.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut menu = Menu::new();
        menu.up();
        assert_eq!(menu.selected(), MenuItem::Exit);
        menu.down();
        assert_eq!(menu.selected(), MenuItem::NewGame);
        menu.down();
        menu.down();
        assert_eq!(menu.selected(), MenuItem::HighScores);
    }

    #[test]
    fn menu_lists_every_item() {
        let mut fb = FrameBuffer::new(40, 20);
        MenuView::new().render_menu_into(&Menu::new(), Viewport::new(40, 20), &mut fb);
        let t = text(&fb);
        for item in MenuItem::ALL {
            assert!(t.contains(item.label()), "{:?}", item);
        }
        assert!(t.contains('>'));
    }

    #[test]
    fn high_scores_show_names_and_scores() {
        let mut fb = FrameBuffer::new(60, 24);
        let table = HighScoreTable::defaults();
        MenuView::new().render_high_scores_into(&table, Viewport::new(60, 24), &mut fb);
        let t = text(&fb);
        assert!(t.contains("God-like"));
        assert!(t.contains("200000"));
        assert!(t.contains("Exceeds Expectations"));
    }

    #[test]
    fn name_entry_box_shows_typed_text() {
        let mut fb = FrameBuffer::new(50, 5);
        MenuView::new().draw_name_entry(&mut fb, "Ann");
        assert!(text(&fb).contains("Enter name: Ann_"));
    }

    #[test]
    fn instructions_are_narrow() {
        assert!(INSTRUCTIONS.lines().all(|l| l.len() <= 34));
    }
}
