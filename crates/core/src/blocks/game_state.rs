//! Game state module - the falling-block session
//!
//! Ties together board, spawner, collision, line clearing and the gravity
//! clock. All transitions are methods on an owned `BlocksGame`; time only
//! moves when the caller invokes [`BlocksGame::tick`].

use tracing::{debug, info};

use crate::blocks::board::Board;
use crate::blocks::clock::GravityClock;
use crate::blocks::collision::collides;
use crate::blocks::pieces::Piece;
use crate::blocks::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::blocks::spawner::PieceSpawner;
use crate::config::BlocksConfig;
use crate::snapshot::{ActiveSnapshot, BlocksSnapshot};
use crate::types::*;

/// Result of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    pub level_up: bool,
}

/// Complete falling-block state
#[derive(Debug, Clone)]
pub struct BlocksGame {
    config: BlocksConfig,
    board: Board,
    active: Option<Piece>,
    spawner: PieceSpawner,
    clock: GravityClock,
    score: u32,
    level: u32,
    lines: u32,
    last_lock: Option<LockEvent>,
    started: bool,
    paused: bool,
    game_over: bool,
    /// Bumped on every observable change; drives re-rendering.
    revision: u64,
}

impl BlocksGame {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, BlocksConfig::default())
    }

    pub fn with_config(seed: u64, config: BlocksConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            active: None,
            spawner: PieceSpawner::new(seed),
            clock: GravityClock::new(drop_interval_ms(1, &config)),
            score: 0,
            level: 1,
            lines: 0,
            last_lock: None,
            started: false,
            paused: false,
            game_over: false,
            revision: 0,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!(seed = self.spawner.seed(), "blocks game started");
        self.spawn_piece();
        self.touch();
    }

    /// Throw the session away and start over
    ///
    /// The spawner keeps its RNG stream so the next game differs.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.last_lock = None;
        self.paused = false;
        self.game_over = false;
        self.clock = GravityClock::new(drop_interval_ms(1, &self.config));
        self.started = true;
        info!("blocks game restarted");
        self.spawn_piece();
        self.touch();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_lock(&self) -> Option<LockEvent> {
        self.last_lock
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current gravity interval in milliseconds
    pub fn drop_interval_ms(&self) -> u32 {
        self.clock.interval_ms()
    }

    pub fn snapshot(&self) -> BlocksSnapshot {
        let mut snap = BlocksSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut BlocksSnapshot) {
        for (y, row) in out.board.iter_mut().enumerate() {
            row.copy_from_slice(self.board.row(y));
        }
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.clock.interval_ms();
        out.last_lock = self.last_lock;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.revision = self.revision;
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Spawn a new piece; a spawn that collides ends the game
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(self.spawner.next_kind());

        if collides(&piece, &self.board) {
            self.active = None;
            self.game_over = true;
            info!(score = self.score, lines = self.lines, "blocks game over");
            return false;
        }

        debug!(kind = piece.kind.as_str(), x = piece.x, "spawned piece");
        self.active = Some(piece);
        true
    }

    /// Move the active piece, undoing the move if it collides
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if collides(&moved, &self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the active piece clockwise; a colliding rotation is undone
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if collides(&rotated, &self.board) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// One row down; locks the piece when the row below is blocked
    ///
    /// Returns true if the piece locked.
    pub(crate) fn step_down(&mut self) -> bool {
        if self.active.is_none() || self.try_move(0, 1) {
            return false;
        }
        self.lock_piece();
        true
    }

    /// Drop to the lowest free row and lock
    pub(crate) fn hard_drop(&mut self) {
        let Some(mut piece) = self.active else {
            return;
        };

        while !collides(&piece.shifted(0, 1), &self.board) {
            piece = piece.shifted(0, 1);
        }
        self.active = Some(piece);
        self.lock_piece();
    }

    /// Merge the active piece, clear full rows, score, then spawn the next one
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active);

        let cleared = self.board.clear_full_rows().len() as u32;
        let mut points = 0;
        let mut level_up = false;

        if cleared > 0 {
            points = line_clear_score(cleared, self.level);
            self.score = self.score.saturating_add(points);
            self.lines += cleared;

            let new_level = level_for_lines(self.lines);
            if new_level != self.level {
                level_up = true;
                self.level = new_level;
                self.clock
                    .set_interval(drop_interval_ms(new_level, &self.config));
                info!(
                    level = new_level,
                    interval_ms = self.clock.interval_ms(),
                    "level up"
                );
            }
            debug!(cleared, points, total_lines = self.lines, "lines cleared");
        }

        self.last_lock = Some(LockEvent {
            lines_cleared: cleared,
            points,
            level_up,
        });

        self.spawn_piece();
    }

    /// Advance gravity by `elapsed_ms`
    ///
    /// Returns true if the piece moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.paused || self.game_over {
            return false;
        }

        self.clock.accumulate(elapsed_ms);
        let mut stepped = false;
        while self.clock.take_step() {
            stepped = true;
            self.step_down();
            if self.game_over {
                break;
            }
        }

        if stepped {
            self.touch();
        }
        stepped
    }

    /// Apply a player command
    ///
    /// Returns true if the state changed. While paused only pause and restart
    /// are honoured; after game over only restart is.
    pub fn apply_action(&mut self, action: BlocksAction) -> bool {
        let changed = match action {
            BlocksAction::Restart => {
                self.restart();
                return true;
            }
            BlocksAction::Pause => {
                if !self.started || self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
                true
            }
            _ if !self.started || self.paused || self.game_over => false,
            BlocksAction::MoveLeft => self.try_move(-1, 0),
            BlocksAction::MoveRight => self.try_move(1, 0),
            BlocksAction::Rotate => self.try_rotate(),
            BlocksAction::SoftDrop => {
                self.step_down();
                true
            }
            BlocksAction::HardDrop => {
                self.hard_drop();
                true
            }
        };

        if changed {
            self.touch();
        }
        changed
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}

impl Default for BlocksGame {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::pieces::{spawn_shape, Shape};

    fn started(seed: u64) -> BlocksGame {
        let mut game = BlocksGame::new(seed);
        game.start();
        game
    }

    fn vertical_bar(x: i8, y: i8) -> Piece {
        Piece {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I).rotated_cw(),
            x,
            y,
        }
    }

    #[test]
    fn test_new_game_state() {
        let game = BlocksGame::new(12345);

        assert!(!game.started);
        assert!(!game.game_over);
        assert!(!game.paused);
        assert_eq!(game.score, 0);
        assert_eq!(game.level, 1);
        assert_eq!(game.lines, 0);
        assert!(game.active.is_none());
        assert_eq!(game.drop_interval_ms(), 1000);
    }

    #[test]
    fn test_game_start_spawns_at_top() {
        let game = started(12345);
        let piece = game.active.unwrap();
        assert_eq!(piece.y, 0);
        assert_eq!(piece, Piece::spawn(piece.kind));
    }

    #[test]
    fn test_move_against_wall_is_rolled_back() {
        let mut game = started(12345);

        let mut moved = 0;
        for _ in 0..20 {
            if game.try_move(-1, 0) {
                moved += 1;
            }
        }
        let piece = game.active.unwrap();
        assert_eq!(piece.x, 0);
        assert_eq!(moved as i8, Piece::spawn(piece.kind).x);
        assert!(!game.try_move(-1, 0));
        assert_eq!(game.active.unwrap().x, 0);
    }

    #[test]
    fn test_blocked_rotation_keeps_shape() {
        let mut game = started(7);
        // A horizontal bar resting on the floor has no room to turn upright
        // once the cells above are filled.
        let bar = Piece {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I),
            x: 4,
            y: 19,
        };
        game.board_mut().fill_row_except(18, &[], PieceKind::O);
        game.set_active(bar);

        assert!(!game.try_rotate());
        assert_eq!(game.active.unwrap().shape, bar.shape);
        assert_eq!(game.active.unwrap().x, 4);
    }

    #[test]
    fn test_free_rotation_turns_shape() {
        let mut game = started(7);
        let bar = Piece {
            kind: PieceKind::I,
            shape: spawn_shape(PieceKind::I),
            x: 4,
            y: 5,
        };
        game.set_active(bar);

        assert!(game.try_rotate());
        let shape = game.active.unwrap().shape;
        assert_eq!(shape, Shape::from_rows(&[&[1], &[1], &[1], &[1]]));
    }

    #[test]
    fn test_vertical_bar_fills_gap_and_clears_row() {
        let mut game = started(99);
        game.board_mut().fill_row_except(19, &[0], PieceKind::T);
        game.set_active(vertical_bar(0, 0));

        assert!(game.apply_action(BlocksAction::HardDrop));

        assert_eq!(game.lines, 1);
        assert_eq!(game.level, level_for_lines(1));
        assert_eq!(game.score, 100);
        // The three upper bar cells dropped by one row.
        assert_eq!(game.board.get(0, 19), Some(Some(PieceKind::I)));
        assert_eq!(game.board.get(0, 17), Some(Some(PieceKind::I)));
        assert_eq!(game.board.get(0, 16), Some(None));
        assert_eq!(game.board.get(1, 19), Some(None));
        assert_eq!(game.board.filled_count(), 3);
        assert_eq!(
            game.last_lock,
            Some(LockEvent {
                lines_cleared: 1,
                points: 100,
                level_up: false
            })
        );
    }

    #[test]
    fn test_score_uses_level_before_clear() {
        let mut game = started(5);
        game.lines = 9;
        game.level = 1;
        game.board_mut().fill_row_except(19, &[0], PieceKind::T);
        game.board_mut().fill_row_except(18, &[0], PieceKind::T);
        game.set_active(vertical_bar(0, 0));

        game.hard_drop();

        assert_eq!(game.lines, 11);
        assert_eq!(game.score, 200);
        assert_eq!(game.level, 2);
        assert_eq!(game.drop_interval_ms(), 900);
        assert!(game.last_lock.unwrap().level_up);
    }

    #[test]
    fn test_soft_drop_locks_on_floor() {
        let mut game = started(11);
        let piece = Piece::spawn(PieceKind::O).shifted(0, 18);
        game.set_active(piece);

        assert!(game.step_down());
        assert_eq!(game.board.get(piece.x, 19), Some(Some(PieceKind::O)));
        assert_eq!(game.board.get(piece.x + 1, 18), Some(Some(PieceKind::O)));
        assert!(game.active.is_some());
    }

    #[test]
    fn test_tick_gravity() {
        let mut game = started(12345);
        let y0 = game.active.unwrap().y;

        assert!(!game.tick(999));
        assert_eq!(game.active.unwrap().y, y0);
        assert!(game.tick(1));
        assert_eq!(game.active.unwrap().y, y0 + 1);
    }

    #[test]
    fn test_pause_stops_gravity_and_input() {
        let mut game = started(12345);
        assert!(game.apply_action(BlocksAction::Pause));
        assert!(game.paused());

        let before = game.active;
        assert!(!game.tick(5000));
        assert!(!game.apply_action(BlocksAction::MoveLeft));
        assert!(!game.apply_action(BlocksAction::HardDrop));
        assert_eq!(game.active, before);

        assert!(game.apply_action(BlocksAction::Pause));
        assert!(game.tick(1000));
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let mut game = started(3);
        for y in 0..2 {
            game.board_mut().fill_row_except(y, &[0], PieceKind::Z);
        }
        game.set_active(Piece::spawn(PieceKind::O).shifted(-5, 17));

        game.hard_drop();

        assert!(game.game_over());
        assert!(game.active.is_none());
        assert!(!game.tick(10_000));
        assert!(!game.apply_action(BlocksAction::MoveRight));
        assert!(!game.apply_action(BlocksAction::Pause));
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = started(3);
        game.game_over = true;
        game.score = 500;
        game.board_mut().fill_row_except(10, &[2], PieceKind::J);

        assert!(game.apply_action(BlocksAction::Restart));
        assert!(!game.game_over());
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.board().filled_count(), 0);
        assert!(game.active().is_some());
        assert_eq!(game.drop_interval_ms(), 1000);
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut game = started(1);
        let r0 = game.revision();
        game.tick(10);
        assert_eq!(game.revision(), r0);
        game.apply_action(BlocksAction::SoftDrop);
        assert!(game.revision() > r0);
    }
}
