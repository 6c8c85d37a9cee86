//! Pairs won per side

use crate::types::{Outcome, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub human: u32,
    pub computer: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one pair to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }

    /// Pairs matched so far by both sides
    pub fn total(&self) -> u32 {
        self.human + self.computer
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.human, self.computer)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_and_total() {
        let mut scores = ScoreBoard::new();
        scores.award(Side::Human);
        scores.award(Side::Computer);
        scores.award(Side::Computer);

        assert_eq!(scores.get(Side::Human), 1);
        assert_eq!(scores.get(Side::Computer), 2);
        assert_eq!(scores.total(), 3);
        assert_eq!(scores.outcome(), Outcome::ComputerWins);

        scores.reset();
        assert_eq!(scores.total(), 0);
        assert_eq!(scores.outcome(), Outcome::Tie);
    }
}
