//! Pairs game: deck, turn flow and whole-game invariants

use std::collections::HashMap;

use tui_minigames::core::{CardState, Deck, FlipRejected, GameRng, MatchConfig, MatchGame};
use tui_minigames::types::{Difficulty, MemoryPolicy, Outcome, Side, DECK_SIZE, PAIR_COUNT};

#[test]
fn test_every_deal_has_26_pairs() {
    for seed in 0..50 {
        let deck = Deck::shuffled(&mut GameRng::new(seed));
        assert_eq!(deck.cards().len(), DECK_SIZE);

        let mut faces = HashMap::new();
        for card in deck.cards() {
            faces
                .entry((card.suit, card.rank))
                .or_insert_with(Vec::new)
                .push(card.id);
        }
        assert_eq!(faces.len(), PAIR_COUNT);
        for ids in faces.values() {
            assert_eq!(ids.len(), 2);
            assert_ne!(ids[0], ids[1]);
        }
    }
}

#[test]
fn test_matching_pair_after_delay() {
    let mut game = MatchGame::new(2024);
    let (a, b) = game.deck().positions_of(11).unwrap();
    let before = game.scores().human;

    game.flip(a).unwrap();
    game.flip(b).unwrap();
    game.tick(game.config().reveal_delay_ms);

    assert_eq!(game.state(a), Some(CardState::Matched));
    assert_eq!(game.state(b), Some(CardState::Matched));
    assert_eq!(game.scores().human, before + 1);
    assert_eq!(game.active_side(), Side::Human);
}

/// Play a whole game with instant delays; the human flips the first two
/// hidden cards each turn.
fn play_out(seed: u64, difficulty: Difficulty, memory: MemoryPolicy) -> MatchGame {
    let config = MatchConfig::default()
        .with_difficulty(difficulty)
        .with_memory_policy(memory)
        .instant();
    let mut game = MatchGame::with_config(seed, config);

    for _ in 0..10_000 {
        if game.is_finished() {
            break;
        }
        if game.active_side() == Side::Human && !game.is_resolving() {
            let hidden: Vec<usize> = (0..DECK_SIZE)
                .filter(|&p| game.state(p) == Some(CardState::Hidden))
                .take(2)
                .collect();
            game.flip(hidden[0]).unwrap();
            game.flip(hidden[1]).unwrap();
        }
        game.tick(0);
    }
    game
}

#[test]
fn test_completed_games_award_all_pairs() {
    for seed in 0..20 {
        for difficulty in Difficulty::ALL {
            for memory in [MemoryPolicy::Both, MemoryPolicy::HumanOnly] {
                let game = play_out(seed, difficulty, memory);
                let scores = game.scores();

                assert!(game.is_finished(), "seed {seed} {difficulty:?}");
                assert_eq!(scores.human + scores.computer, PAIR_COUNT as u32);
                assert_eq!(game.remaining_pairs(), 0);
                assert!(game.states().iter().all(|s| *s == CardState::Matched));
                assert_eq!(
                    game.outcome(),
                    Some(Outcome::from_scores(scores.human, scores.computer))
                );
                assert_eq!(game.pending_events(), 0);
            }
        }
    }
}

#[test]
fn test_finished_game_rejects_flips() {
    let mut game = play_out(3, Difficulty::Hard, MemoryPolicy::Both);
    assert_eq!(game.flip(0), Err(FlipRejected::GameOver));

    game.restart();
    assert!(!game.is_finished());
    assert!(game.flip(0).is_ok());
}

#[test]
fn test_computer_flips_only_after_delays() {
    let mut game = MatchGame::new(8);
    let (a, _) = game.deck().positions_of(0).unwrap();
    let (b, _) = game.deck().positions_of(1).unwrap();
    game.flip(a).unwrap();
    game.flip(b).unwrap();

    // reveal (1000) + mismatch hide (1500) + think (1000) - 1
    game.tick(3499);
    assert_eq!(game.active_side(), Side::Computer);
    assert!(game
        .states()
        .iter()
        .all(|s| *s == CardState::Hidden));

    game.tick(1);
    let face_up = game
        .states()
        .iter()
        .filter(|s| **s == CardState::FaceUp)
        .count();
    assert_eq!(face_up, 1);
}

#[test]
fn test_rematch_mid_computer_turn_is_clean() {
    let mut game = MatchGame::new(21);
    let (a, _) = game.deck().positions_of(4).unwrap();
    let (b, _) = game.deck().positions_of(5).unwrap();
    game.flip(a).unwrap();
    game.flip(b).unwrap();
    game.tick(3500);
    assert_eq!(game.active_side(), Side::Computer);

    game.restart();
    game.tick(60_000);

    assert_eq!(game.active_side(), Side::Human);
    assert!(game.states().iter().all(|s| *s == CardState::Hidden));
    assert!(game.memory().is_empty());
    assert_eq!(game.pending_events(), 0);
}

#[test]
fn test_revision_changes_on_flip() {
    let mut game = MatchGame::new(1);
    let r0 = game.revision();
    assert!(game.flip(DECK_SIZE + 3).is_err());
    assert_eq!(game.revision(), r0);
    game.flip(0).unwrap();
    assert!(game.revision() > r0);
}
