//! Computer opponent - picks the two positions to flip on its turn

use tracing::debug;

use crate::matching::deck::CardState;
use crate::matching::memory::{find_pair, OpponentMemory};
use crate::rng::GameRng;
use crate::types::{Difficulty, NORMAL_MEMORY_WINDOW};

/// Two positions the computer will flip, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub first: usize,
    pub second: usize,
    /// True when the pair came from memory rather than a guess
    pub from_memory: bool,
}

/// Choose the computer's move
///
/// Returns `None` when fewer than two hidden cards remain.
pub fn choose_move(
    difficulty: Difficulty,
    memory: &OpponentMemory,
    states: &[CardState],
    rng: &mut GameRng,
) -> Option<ComputerMove> {
    let recalled = match difficulty {
        Difficulty::Easy => None,
        Difficulty::Normal => find_pair(memory.recent(NORMAL_MEMORY_WINDOW), states),
        Difficulty::Hard => find_pair(memory.entries(), states),
    };

    if let Some((first, second)) = recalled {
        debug!(difficulty = difficulty.as_str(), first, second, "recalled pair");
        return Some(ComputerMove {
            first,
            second,
            from_memory: true,
        });
    }

    random_move(states, rng)
}

/// Two distinct hidden positions chosen uniformly
pub fn random_move(states: &[CardState], rng: &mut GameRng) -> Option<ComputerMove> {
    let mut hidden: Vec<usize> = states
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == CardState::Hidden)
        .map(|(i, _)| i)
        .collect();

    if hidden.len() < 2 {
        return None;
    }

    let first = hidden.swap_remove(rng.next_index(hidden.len()));
    let second = hidden[rng.next_index(hidden.len())];
    Some(ComputerMove {
        first,
        second,
        from_memory: false,
    })
}
