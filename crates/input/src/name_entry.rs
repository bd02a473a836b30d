//! High score name entry.
//!
//! Printable ASCII only, up to [`MAX_NAME_LEN`] characters. Backspace
//! deletes, Enter or Esc finishes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::MAX_NAME_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEntryStatus {
    Editing,
    Done,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    name: String,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> NameEntryStatus {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => return NameEntryStatus::Done,
            KeyCode::Backspace => {
                self.name.pop();
            }
            KeyCode::Char(c)
                if (' '..='~').contains(&c)
                    && !key.modifiers.contains(KeyModifiers::CONTROL)
                    && self.name.len() < MAX_NAME_LEN =>
            {
                self.name.push(c);
            }
            _ => {}
        }
        NameEntryStatus::Editing
    }
}
