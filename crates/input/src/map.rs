//! Key mapping from terminal events to game and menu commands.
//!
//! Only one-shot keys are mapped here. Keys that are held (left, right,
//! soft drop) go through [`crate::InputHandler`].

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Menu navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Up,
    Down,
    Select,
    Back,
}

/// Map a key press to a one-shot game event.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(InputEvent::Rotate),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(InputEvent::RotateCcw),

        KeyCode::Char(' ') => Some(InputEvent::HardDrop),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),

        _ => None,
    }
}

/// Map a key press to a menu command.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuCommand> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(MenuCommand::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(MenuCommand::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuCommand::Select),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuCommand::Back),
        _ => None,
    }
}

/// Ctrl-C leaves the program from anywhere.
pub fn should_exit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
