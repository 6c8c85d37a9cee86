use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_minigames::core::blocks::{collides, Piece};
use tui_minigames::core::matching::choose_move;
use tui_minigames::core::{Board, BlocksGame, CardState, Deck, GameRng, MatchConfig, MatchGame, OpponentMemory};
use tui_minigames::types::{BlocksAction, Difficulty, PieceKind, BOARD_WIDTH, DECK_SIZE};

fn bench_tick(c: &mut Criterion) {
    let mut game = BlocksGame::new(12345);
    game.start();

    c.bench_function("blocks_tick_16ms", |b| {
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            game.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row_except(y, &[], PieceKind::I);
            }
            board.clear_full_rows()
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 10..20 {
        board.fill_row_except(y, &[(y % BOARD_WIDTH as i8)], PieceKind::T);
    }
    let piece = Piece::spawn(PieceKind::T).shifted(0, 8);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&piece), black_box(&board)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = BlocksGame::new(12345);
    game.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            game.apply_action(BlocksAction::HardDrop);
        })
    });
}

fn bench_deal(c: &mut Criterion) {
    let mut rng = GameRng::new(7);
    c.bench_function("deal_52", |b| b.iter(|| Deck::shuffled(&mut rng)));
}

fn bench_hard_recall(c: &mut Criterion) {
    let mut rng = GameRng::new(3);
    let deck = Deck::shuffled(&mut rng);
    let states = [CardState::Hidden; DECK_SIZE];
    // Long memory with no usable pair forces a full scan.
    let mut memory = OpponentMemory::new();
    for pos in 0..DECK_SIZE {
        let card = deck.cards()[pos];
        if deck.cards()[..pos].iter().all(|c| !c.same_face(&card)) {
            memory.record(pos, card);
        }
    }

    c.bench_function("hard_recall_scan", |b| {
        b.iter(|| choose_move(Difficulty::Hard, black_box(&memory), &states, &mut rng))
    });
}

fn bench_full_pairs_game(c: &mut Criterion) {
    let config = MatchConfig::default()
        .with_difficulty(Difficulty::Hard)
        .instant();

    c.bench_function("pairs_full_game", |b| {
        b.iter(|| {
            let mut game = MatchGame::with_config(black_box(11), config);
            while !game.is_finished() {
                if !game.is_resolving() {
                    let mut hidden = (0..DECK_SIZE).filter(|&p| game.state(p) == Some(CardState::Hidden));
                    if let (Some(a), Some(b)) = (hidden.next(), hidden.next()) {
                        let _ = game.flip(a);
                        let _ = game.flip(b);
                    }
                }
                game.tick(0);
            }
            game.scores()
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_hard_drop,
    bench_deal,
    bench_hard_recall,
    bench_full_pairs_game
);
criterion_main!(benches);
