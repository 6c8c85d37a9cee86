//! Opponent memory - what the computer has seen face-up and lost track of
//!
//! Append-only per game. Entries are never pruned when a card gets matched;
//! lookups skip positions that are no longer hidden instead.

use crate::matching::deck::{Card, CardState};

/// One remembered reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryEntry {
    pub position: usize,
    pub card: Card,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpponentMemory {
    entries: Vec<MemoryEntry>,
}

impl OpponentMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, position: usize, card: Card) {
        self.entries.push(MemoryEntry { position, card });
    }

    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    /// The last `n` entries, oldest first
    pub fn recent(&self, n: usize) -> &[MemoryEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// First remembered pair that can still be played
///
/// Scans `i < j` in insertion order, so the earliest pair wins. Both positions
/// must differ and still be hidden.
pub fn find_pair(entries: &[MemoryEntry], states: &[CardState]) -> Option<(usize, usize)> {
    let playable = |e: &MemoryEntry| states.get(e.position) == Some(&CardState::Hidden);

    for (i, a) in entries.iter().enumerate() {
        if !playable(a) {
            continue;
        }
        for b in &entries[i + 1..] {
            if b.position != a.position && playable(b) && a.card.same_face(&b.card) {
                return Some((a.position, b.position));
            }
        }
    }
    None
}
