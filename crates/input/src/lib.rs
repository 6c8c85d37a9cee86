//! Terminal input module.
//!
//! Maps `crossterm` key events into commands for the start menu, the
//! falling-block game and the pairs table. Game crates never see raw keys.

pub mod cursor;
pub mod map;

pub use tui_minigames_types as types;

pub use cursor::GridCursor;
pub use map::{
    blocks_action, menu_command, pairs_command, should_quit, CursorMove, MenuCommand,
    PairsCommand,
};
