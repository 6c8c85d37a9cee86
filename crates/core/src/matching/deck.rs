//! Deck module - the 52-card pairs table
//!
//! 26 faces are drawn without replacement from the 52 suit×rank combinations
//! and every face is dealt twice. The two copies share a `pair_id` but keep
//! distinct ids.

use crate::rng::GameRng;
use crate::types::{Rank, Suit, DECK_SIZE, PAIR_COUNT};

/// One card on the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub pair_id: u8,
    pub id: u8,
}

impl Card {
    /// Matching compares faces only; ids always differ
    pub fn same_face(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

/// Per-position card state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    #[default]
    Hidden,
    FaceUp,
    /// Terminal; a matched card never changes again
    Matched,
}

/// Shuffled table of cards, indexed by board position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Deal a fresh table
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut faces: Vec<(Suit, Rank)> = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| (suit, rank)))
            .collect();
        rng.shuffle(&mut faces);

        let mut cards = [Card {
            suit: Suit::Spades,
            rank: Rank::Ace,
            pair_id: 0,
            id: 0,
        }; DECK_SIZE];
        for (pair_id, &(suit, rank)) in faces.iter().take(PAIR_COUNT).enumerate() {
            for copy in 0..2 {
                let id = pair_id * 2 + copy;
                cards[id] = Card {
                    suit,
                    rank,
                    pair_id: pair_id as u8,
                    id: id as u8,
                };
            }
        }
        rng.shuffle(&mut cards);

        Self { cards }
    }

    /// Card at a board position
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        DECK_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Both positions holding the given pair
    pub fn positions_of(&self, pair_id: u8) -> Option<(usize, usize)> {
        let mut found = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.pair_id == pair_id)
            .map(|(i, _)| i);
        Some((found.next()?, found.next()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_deck_has_26_pairs() {
        let deck = Deck::shuffled(&mut GameRng::new(42));
        assert_eq!(deck.cards().len(), 52);

        let mut faces: HashMap<(Suit, Rank), usize> = HashMap::new();
        for card in deck.cards() {
            *faces.entry((card.suit, card.rank)).or_default() += 1;
        }
        assert_eq!(faces.len(), 26);
        assert!(faces.values().all(|&n| n == 2));
    }

    #[test]
    fn test_ids_are_distinct() {
        let deck = Deck::shuffled(&mut GameRng::new(7));
        let ids: HashSet<u8> = deck.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn test_pair_copies_share_face() {
        let deck = Deck::shuffled(&mut GameRng::new(3));
        for pair_id in 0..PAIR_COUNT as u8 {
            let (a, b) = deck.positions_of(pair_id).unwrap();
            assert_ne!(a, b);
            let (ca, cb) = (deck.cards()[a], deck.cards()[b]);
            assert!(ca.same_face(&cb));
            assert_ne!(ca.id, cb.id);
        }
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = Deck::shuffled(&mut GameRng::new(99));
        let b = Deck::shuffled(&mut GameRng::new(99));
        let c = Deck::shuffled(&mut GameRng::new(100));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
