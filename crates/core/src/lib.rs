//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules and state of both games. It has **no
//! dependencies** on the terminal or on wall-clock time:
//!
//! - **Deterministic**: the same seed deals the same table and piece sequence
//! - **Testable**: time only moves through `tick(elapsed_ms)`
//! - **Portable**: any front end can render the snapshots
//!
//! # Module Structure
//!
//! - [`blocks`]: falling-block game (board, pieces, collision, scoring, gravity)
//! - [`matching`]: pairs game (deck, opponent memory, turn controller)
//! - [`timer`]: cancellable scheduler for delayed transitions
//! - [`rng`]: seeded random source shared by both games
//! - [`snapshot`]: render-ready copies of game state
//! - [`config`]: timing and difficulty settings, readable from the environment
//! - [`error`]: flip rejections and configuration errors
//!
//! # Example
//!
//! ```
//! use tui_minigames_core::{BlocksGame, MatchGame};
//! use tui_minigames_types::BlocksAction;
//!
//! let mut blocks = BlocksGame::new(12345);
//! blocks.start();
//! blocks.apply_action(BlocksAction::MoveRight);
//! blocks.apply_action(BlocksAction::HardDrop);
//! assert!(blocks.board().filled_count() > 0);
//!
//! let mut pairs = MatchGame::new(12345);
//! let (a, b) = pairs.deck().positions_of(0).unwrap();
//! pairs.flip(a).unwrap();
//! pairs.flip(b).unwrap();
//! pairs.tick(1000);
//! assert_eq!(pairs.scores().human, 1);
//! ```
//!
//! # Timing
//!
//! Both games use the same model: the caller reports elapsed milliseconds
//! and the game catches up. Call `tick` every frame.

pub mod blocks;
pub mod config;
pub mod error;
pub mod matching;
pub mod rng;
pub mod snapshot;
pub mod timer;

pub use tui_minigames_types as types;

// Re-export commonly used types for convenience
pub use blocks::{Board, BlocksGame, LockEvent, Piece};
pub use config::{BlocksConfig, MatchConfig};
pub use error::{ConfigError, FlipRejected};
pub use matching::{Card, CardState, Deck, MatchGame, OpponentMemory, ScoreBoard};
pub use rng::GameRng;
pub use snapshot::{ActiveSnapshot, BlocksSnapshot, CardSnapshot, MatchSnapshot};
pub use timer::Scheduler;
