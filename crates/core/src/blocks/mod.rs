//! Falling-block game
//!
//! - [`board`]: 12x20 grid and line clearing
//! - [`pieces`]: shape matrices and clockwise rotation
//! - [`collision`]: piece-vs-board overlap test
//! - [`scoring`]: line-clear points, level and gravity interval
//! - [`spawner`]: uniform random piece kinds
//! - [`clock`]: gravity accumulator
//! - [`game_state`]: the session tying it all together

pub mod board;
pub mod clock;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod scoring;
pub mod spawner;

pub use board::Board;
pub use clock::GravityClock;
pub use collision::collides;
pub use game_state::{BlocksGame, LockEvent};
pub use pieces::{spawn_shape, Piece, Shape};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use spawner::PieceSpawner;
