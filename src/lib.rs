//! tui-bloc (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_bloc::{core,input,store,term,types}`
//! and holds the runtime configuration used by the binary.

pub mod config;

pub use tui_bloc_core as core;
pub use tui_bloc_input as input;
pub use tui_bloc_store as store;
pub use tui_bloc_term as term;
pub use tui_bloc_types as types;

pub use config::AppConfig;
