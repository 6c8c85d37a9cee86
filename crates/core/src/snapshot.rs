//! Render snapshots
//!
//! Plain `Copy` views of each game, filled in place by `snapshot_into` so the
//! front end can reuse one buffer per frame.

use crate::blocks::game_state::LockEvent;
use crate::blocks::pieces::Piece;
use crate::matching::deck::CardState;
use crate::matching::game::Resolution;
use crate::types::{
    Cell, Difficulty, Outcome, PieceKind, Rank, Side, Suit, BOARD_HEIGHT, BOARD_WIDTH, DECK_SIZE,
    PAIR_COUNT,
};

/// Active piece as absolute board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        let mut cells = [(piece.x, piece.y); 4];
        for (slot, cell) in cells.iter_mut().zip(piece.cells()) {
            *slot = cell;
        }
        Self {
            kind: piece.kind,
            cells,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlocksSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub last_lock: Option<LockEvent>,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub revision: u64,
}

impl BlocksSnapshot {
    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.paused
    }
}

impl Default for BlocksSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 0,
            last_lock: None,
            started: false,
            paused: false,
            game_over: false,
            revision: 0,
        }
    }
}

/// One table position; the face is only present while it is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSnapshot {
    pub state: CardState,
    pub face: Option<(Suit, Rank)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSnapshot {
    pub cards: [CardSnapshot; DECK_SIZE],
    pub active: Side,
    pub resolving: bool,
    pub human_score: u32,
    pub computer_score: u32,
    pub remaining_pairs: u32,
    pub outcome: Option<Outcome>,
    pub difficulty: Difficulty,
    pub memory_len: usize,
    pub last_resolution: Option<Resolution>,
    pub revision: u64,
}

impl MatchSnapshot {
    /// Whether the human may flip right now
    pub fn awaiting_human(&self) -> bool {
        self.outcome.is_none() && self.active == Side::Human && !self.resolving
    }
}

impl Default for MatchSnapshot {
    fn default() -> Self {
        Self {
            cards: [CardSnapshot::default(); DECK_SIZE],
            active: Side::Human,
            resolving: false,
            human_score: 0,
            computer_score: 0,
            remaining_pairs: PAIR_COUNT as u32,
            outcome: None,
            difficulty: Difficulty::default(),
            memory_len: 0,
            last_resolution: None,
            revision: 0,
        }
    }
}
