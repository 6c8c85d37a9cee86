//! Terminal minigames (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the
//! application screens shared by the binary and the integration tests.

pub mod app;

pub use tui_minigames_core as core;
pub use tui_minigames_input as input;
pub use tui_minigames_term as term;
pub use tui_minigames_types as types;
