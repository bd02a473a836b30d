//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the board and its
//! line-clear animation, the static piece catalogue, the piece controller,
//! scoring and the high score table, and the fixed-tick driver that ties them
//! together. It has no dependency on the terminal, the filesystem or the
//! clock (apart from [`SimpleRng::from_clock`]).
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, full-row detection and the flash/compaction animation
//! - [`pieces`]: shape table indexed by color and rotation
//! - [`rng`]: injectable piece randomness
//! - [`controller`]: active and next piece, movement, rotation, drops, locking
//! - [`scoring`]: line awards, hard-drop bonus, level arithmetic
//! - [`high_scores`]: the ten-entry table and its text form
//! - [`game_state`]: timers and input handling, one tick at a time
//!
//! # Game Rules
//!
//! - Rotation is a table lookup with no wall kicks
//! - Pieces lock as soon as they cannot move down
//! - Full rows flash for 20 ticks before they are removed
//! - Gravity starts at one row per 30 ticks and speeds up every 3000 ticks
//!
//! # Example
//!
//! ```
//! use tui_bloc_core::GameState;
//! use tui_bloc_types::InputEvent;
//!
//! let mut game = GameState::new(12345);
//! game.handle(InputEvent::MoveRightStart);
//! game.handle(InputEvent::MoveRightStop);
//! game.handle(InputEvent::HardDrop);
//! for _ in 0..100 {
//!     game.tick();
//! }
//! assert!(!game.quit());
//! ```

pub mod audio;
pub mod board;
pub mod controller;
pub mod game_state;
pub mod high_scores;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_bloc_types as types;

// Re-export commonly used types for convenience
pub use audio::{AudioSink, NullAudio, RecordingAudio};
pub use board::Board;
pub use controller::{LockOutcome, Piece, PieceController, VerticalMove};
pub use game_state::GameState;
pub use high_scores::{HighScore, HighScoreTable};
pub use pieces::{get_shape, mask};
pub use rng::{PieceRng, SequenceRng, SimpleRng};
pub use scoring::{calculate_award, level_for_difficulty, ScoreLedger};
pub use snapshot::{GameSnapshot, PieceSnapshot};
