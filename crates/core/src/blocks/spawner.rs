//! Piece spawner - uniform random draw over the seven shapes

use crate::rng::GameRng;
use crate::types::PieceKind;

#[derive(Debug, Clone)]
pub struct PieceSpawner {
    rng: GameRng,
}

impl PieceSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_index(PieceKind::ALL.len())]
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
