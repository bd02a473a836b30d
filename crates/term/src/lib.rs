//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views render into a plain
//! framebuffer, and [`TerminalRenderer`] flushes that framebuffer to the
//! terminal as diffs. Board cells are two columns wide to compensate for
//! the usual terminal glyph aspect ratio.

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod menu;
pub mod renderer;

pub use tui_bloc_core as core;
pub use tui_bloc_types as types;

pub use audio::BellAudio;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use menu::{Menu, MenuItem, MenuView};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
