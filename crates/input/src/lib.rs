//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`]s for the
//! game, menu commands for the front end, and characters for high score name
//! entry. Held keys (move and soft drop) are tracked by [`InputHandler`],
//! which also copes with terminals that never send key-release events.

pub mod handler;
pub mod map;
pub mod name_entry;

pub use tui_bloc_types as types;

pub use handler::InputHandler;
pub use map::{map_key, map_menu_key, should_exit, MenuCommand};
pub use name_entry::{NameEntry, NameEntryStatus};
