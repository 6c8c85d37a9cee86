//! Pairs game against a computer opponent
//!
//! - [`deck`]: the 52-card table
//! - [`memory`]: what the opponent remembers from mismatches
//! - [`opponent`]: per-difficulty move choice
//! - [`score`]: pairs won per side
//! - [`game`]: turn controller

pub mod deck;
pub mod game;
pub mod memory;
pub mod opponent;
pub mod score;

pub use deck::{Card, CardState, Deck};
pub use game::{MatchGame, Resolution};
pub use memory::{find_pair, MemoryEntry, OpponentMemory};
pub use opponent::{choose_move, random_move, ComputerMove};
pub use score::ScoreBoard;
