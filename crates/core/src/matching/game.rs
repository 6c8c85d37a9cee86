//! Match game - turn controller for the pairs game
//!
//! The human and the computer take turns flipping two cards. A matched pair
//! scores and the same side goes again; a mismatch is shown for a moment,
//! remembered by the opponent, hidden again, and the turn passes.
//!
//! Every delay is an event in a [`Scheduler`]; nothing happens between calls
//! to [`MatchGame::tick`].

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::config::MatchConfig;
use crate::error::FlipRejected;
use crate::matching::deck::{Card, CardState, Deck};
use crate::matching::memory::OpponentMemory;
use crate::matching::opponent::{choose_move, random_move};
use crate::matching::score::ScoreBoard;
use crate::rng::GameRng;
use crate::snapshot::{CardSnapshot, MatchSnapshot};
use crate::timer::Scheduler;
use crate::types::{Difficulty, Outcome, Side, DECK_SIZE, PAIR_COUNT};

/// Deferred transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchEvent {
    /// Compare the two face-up cards
    Resolve,
    /// Turn a mismatched pair back over and pass the turn
    HideMismatch,
    /// Computer flips its first card
    ComputerTurn,
    /// Computer flips its second card
    ComputerSecondFlip(usize),
}

/// How the last pair of flips turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub side: Side,
    pub first: usize,
    pub second: usize,
    pub matched: bool,
}

#[derive(Debug, Clone)]
pub struct MatchGame {
    config: MatchConfig,
    rng: GameRng,
    deck: Deck,
    states: [CardState; DECK_SIZE],
    memory: OpponentMemory,
    scores: ScoreBoard,
    active: Side,
    /// Positions flipped during the current turn
    face_up: ArrayVec<usize, 2>,
    /// Set from the second flip until the pair is resolved (and hidden)
    resolving: bool,
    outcome: Option<Outcome>,
    last_resolution: Option<Resolution>,
    scheduler: Scheduler<MatchEvent>,
    revision: u64,
}

impl MatchGame {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, MatchConfig::default())
    }

    /// Deal a table; the human moves first
    pub fn with_config(seed: u64, config: MatchConfig) -> Self {
        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(&mut rng);
        info!(
            seed,
            difficulty = config.difficulty.as_str(),
            memory = config.memory_policy.as_str(),
            "pairs game started"
        );
        Self {
            config,
            rng,
            deck,
            states: [CardState::Hidden; DECK_SIZE],
            memory: OpponentMemory::new(),
            scores: ScoreBoard::new(),
            active: Side::Human,
            face_up: ArrayVec::new(),
            resolving: false,
            outcome: None,
            last_resolution: None,
            scheduler: Scheduler::new(),
            revision: 0,
        }
    }

    /// Rematch at the same difficulty
    ///
    /// Pending reveals and computer turns are cancelled before the new deal.
    pub fn restart(&mut self) {
        let cancelled = self.scheduler.cancel_all();
        self.deck = Deck::shuffled(&mut self.rng);
        self.states = [CardState::Hidden; DECK_SIZE];
        self.memory.clear();
        self.scores.reset();
        self.active = Side::Human;
        self.face_up.clear();
        self.resolving = false;
        self.outcome = None;
        self.last_resolution = None;
        info!(
            cancelled,
            difficulty = self.config.difficulty.as_str(),
            "pairs game restarted"
        );
        self.touch();
    }

    /// Start over with a different opponent
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.restart();
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn card(&self, position: usize) -> Option<&Card> {
        self.deck.get(position)
    }

    pub fn states(&self) -> &[CardState] {
        &self.states
    }

    pub fn state(&self, position: usize) -> Option<CardState> {
        self.states.get(position).copied()
    }

    pub fn memory(&self) -> &OpponentMemory {
        &self.memory
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn active_side(&self) -> Side {
        self.active
    }

    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn last_resolution(&self) -> Option<Resolution> {
        self.last_resolution
    }

    /// Pairs still on the table
    pub fn remaining_pairs(&self) -> u32 {
        PAIR_COUNT as u32 - self.scores.total()
    }

    /// Number of events waiting in the scheduler
    pub fn pending_events(&self) -> usize {
        self.scheduler.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Human flips the card at `position`
    pub fn flip(&mut self, position: usize) -> Result<(), FlipRejected> {
        if self.outcome.is_some() {
            return Err(FlipRejected::GameOver);
        }
        if self.active != Side::Human {
            return Err(FlipRejected::NotYourTurn);
        }
        if self.resolving {
            return Err(FlipRejected::Resolving);
        }
        if self.face_up.is_full() {
            return Err(FlipRejected::TurnFull);
        }
        match self.states.get(position) {
            None => return Err(FlipRejected::OutOfRange(position)),
            Some(CardState::FaceUp) => return Err(FlipRejected::AlreadyFaceUp(position)),
            Some(CardState::Matched) => return Err(FlipRejected::AlreadyMatched(position)),
            Some(CardState::Hidden) => {}
        }

        self.reveal(position);
        Ok(())
    }

    /// Turn a hidden card face-up; the second card of a turn queues resolution
    fn reveal(&mut self, position: usize) {
        self.states[position] = CardState::FaceUp;
        self.face_up.push(position);
        trace!(side = self.active.as_str(), position, "card flipped");

        if self.face_up.is_full() {
            self.resolving = true;
            self.scheduler
                .schedule(self.config.reveal_delay_ms, MatchEvent::Resolve);
        }
        self.touch();
    }

    /// Advance time by `elapsed_ms`, firing every event that falls due
    ///
    /// Returns true if anything changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let target = self.scheduler.now_ms() + elapsed_ms as u64;
        let mut changed = false;

        while let Some(event) = self.scheduler.pop_due(target) {
            self.handle(event);
            changed = true;
        }
        self.scheduler.advance_to(target);

        changed
    }

    fn handle(&mut self, event: MatchEvent) {
        match event {
            MatchEvent::Resolve => self.resolve(),
            MatchEvent::HideMismatch => self.hide_mismatch(),
            MatchEvent::ComputerTurn => self.computer_turn(),
            MatchEvent::ComputerSecondFlip(position) => self.computer_second_flip(position),
        }
    }

    fn resolve(&mut self) {
        let (first, second) = match self.face_up.as_slice() {
            &[a, b] => (a, b),
            _ => {
                self.resolving = false;
                return;
            }
        };
        let side = self.active;
        let matched = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.same_face(b),
            _ => false,
        };

        self.last_resolution = Some(Resolution {
            side,
            first,
            second,
            matched,
        });

        if matched {
            self.states[first] = CardState::Matched;
            self.states[second] = CardState::Matched;
            self.face_up.clear();
            self.resolving = false;
            self.scores.award(side);
            info!(
                side = side.as_str(),
                human = self.scores.human,
                computer = self.scores.computer,
                "pair matched"
            );

            if self.scores.total() as usize == PAIR_COUNT {
                self.finish();
            } else if side == Side::Computer {
                self.schedule_computer_turn();
            }
        } else {
            if self.config.memory_policy.records(side) {
                for position in [first, second] {
                    if let Some(&card) = self.deck.get(position) {
                        self.memory.record(position, card);
                    }
                }
                debug!(
                    side = side.as_str(),
                    first,
                    second,
                    remembered = self.memory.len(),
                    "mismatch recorded"
                );
            }
            self.scheduler
                .schedule(self.config.mismatch_hide_ms, MatchEvent::HideMismatch);
        }
        self.touch();
    }

    fn hide_mismatch(&mut self) {
        for &position in &self.face_up {
            if self.states[position] == CardState::FaceUp {
                self.states[position] = CardState::Hidden;
            }
        }
        self.face_up.clear();
        self.resolving = false;
        self.active = self.active.other();
        debug!(side = self.active.as_str(), "turn passed");

        if self.active == Side::Computer {
            self.schedule_computer_turn();
        }
        self.touch();
    }

    fn schedule_computer_turn(&mut self) {
        self.active = Side::Computer;
        self.scheduler
            .schedule(self.config.computer_think_ms, MatchEvent::ComputerTurn);
    }

    fn computer_turn(&mut self) {
        if self.outcome.is_some() || self.active != Side::Computer {
            return;
        }

        let Some(mv) = choose_move(
            self.config.difficulty,
            &self.memory,
            &self.states,
            &mut self.rng,
        ) else {
            return;
        };

        debug!(
            first = mv.first,
            second = mv.second,
            from_memory = mv.from_memory,
            "computer move"
        );
        self.reveal(mv.first);
        self.scheduler.schedule(
            self.config.computer_second_flip_ms,
            MatchEvent::ComputerSecondFlip(mv.second),
        );
    }

    fn computer_second_flip(&mut self, position: usize) {
        if self.outcome.is_some() || self.active != Side::Computer || self.face_up.len() != 1 {
            return;
        }

        if self.state(position) == Some(CardState::Hidden) {
            self.reveal(position);
        } else if let Some(mv) = random_move(&self.states, &mut self.rng) {
            self.reveal(mv.first);
        }
    }

    /// Close the game once every pair is claimed
    fn finish(&mut self) -> Outcome {
        let outcome = self.scores.outcome();
        self.outcome = Some(outcome);
        self.scheduler.cancel_all();
        info!(
            ?outcome,
            human = self.scores.human,
            computer = self.scores.computer,
            "pairs game finished"
        );
        outcome
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let mut snap = MatchSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut MatchSnapshot) {
        for (slot, (card, &state)) in out
            .cards
            .iter_mut()
            .zip(self.deck.cards().iter().zip(self.states.iter()))
        {
            *slot = CardSnapshot {
                state,
                face: match state {
                    CardState::Hidden => None,
                    CardState::FaceUp | CardState::Matched => Some((card.suit, card.rank)),
                },
            };
        }
        out.active = self.active;
        out.resolving = self.resolving;
        out.human_score = self.scores.human;
        out.computer_score = self.scores.computer;
        out.remaining_pairs = self.remaining_pairs();
        out.outcome = self.outcome;
        out.difficulty = self.config.difficulty;
        out.memory_len = self.memory.len();
        out.last_resolution = self.last_resolution;
        out.revision = self.revision;
    }
}
