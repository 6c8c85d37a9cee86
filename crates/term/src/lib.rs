//! Terminal "game renderer" module.
//!
//! A small game-oriented rendering layer: views draw snapshots into a
//! framebuffer, the renderer diffs consecutive frames and writes the changed
//! runs with crossterm. No widget toolkit is involved.
//!
//! - [`fb`]: framebuffer, glyphs and styles
//! - [`renderer`]: diffing terminal writer
//! - [`throttle`]: revision-based frame skipping
//! - [`blocks_view`], [`pairs_view`], [`menu_view`]: one view per screen

pub mod blocks_view;
pub mod fb;
pub mod layout;
pub mod menu_view;
pub mod pairs_view;
pub mod renderer;
pub mod throttle;

pub use tui_minigames_core as core;
pub use tui_minigames_types as types;

pub use blocks_view::BlocksView;
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use layout::Viewport;
pub use menu_view::{MenuEntry, MenuView};
pub use pairs_view::{PairsView, TABLE_COLS, TABLE_ROWS};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::{RenderThrottle, STATIC_REFRESH_MS};
