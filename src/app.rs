//! Application screens: start menu, falling blocks, pairs table.
//!
//! Owns whichever game is running and routes keys and elapsed time to it.
//! Rendering goes through the pure views in the term crate.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{info, trace};

use crate::core::{BlocksConfig, BlocksGame, MatchConfig, MatchGame};
use crate::input::{
    blocks_action, menu_command, pairs_command, should_quit, GridCursor, MenuCommand,
    PairsCommand,
};
use crate::term::{
    BlocksView, FrameBuffer, MenuEntry, MenuView, PairsView, Viewport, TABLE_COLS, TABLE_ROWS,
};
use crate::types::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Blocks,
    Pairs,
}

pub struct App {
    screen: Screen,
    selected: MenuEntry,
    match_config: MatchConfig,
    blocks_config: BlocksConfig,
    next_seed: u64,
    blocks: Option<BlocksGame>,
    pairs: Option<MatchGame>,
    cursor: GridCursor,
    should_quit: bool,
    /// Bumped on menu and cursor changes that no game revision covers
    ui_revision: u64,
    blocks_view: BlocksView,
    pairs_view: PairsView,
    menu_view: MenuView,
}

impl App {
    pub fn new(seed: u64, match_config: MatchConfig, blocks_config: BlocksConfig) -> Self {
        Self {
            screen: Screen::Menu,
            selected: MenuEntry::Blocks,
            match_config,
            blocks_config,
            next_seed: seed,
            blocks: None,
            pairs: None,
            cursor: GridCursor::new(TABLE_COLS, TABLE_ROWS),
            should_quit: false,
            ui_revision: 0,
            blocks_view: BlocksView::default(),
            pairs_view: PairsView::new(),
            menu_view: MenuView::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn difficulty(&self) -> Difficulty {
        self.match_config.difficulty
    }

    pub fn blocks(&self) -> Option<&BlocksGame> {
        self.blocks.as_ref()
    }

    pub fn pairs(&self) -> Option<&MatchGame> {
        self.pairs.as_ref()
    }

    pub fn cursor(&self) -> GridCursor {
        self.cursor
    }

    fn take_seed(&mut self) -> u64 {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);
        seed
    }

    fn touch(&mut self) {
        self.ui_revision = self.ui_revision.wrapping_add(1);
    }

    /// Fingerprint for the render throttle
    pub fn revision(&self) -> u64 {
        let game = match self.screen {
            Screen::Menu => 0,
            Screen::Blocks => self.blocks.as_ref().map_or(0, BlocksGame::revision),
            Screen::Pairs => self.pairs.as_ref().map_or(0, MatchGame::revision),
        };
        (self.ui_revision << 32) ^ game
    }

    /// Start a fresh falling-block game
    pub fn open_blocks(&mut self) {
        let mut game = BlocksGame::with_config(self.take_seed(), self.blocks_config);
        game.start();
        self.blocks = Some(game);
        self.switch(Screen::Blocks);
    }

    /// Deal a fresh pairs table at the configured difficulty
    pub fn open_pairs(&mut self) {
        let game = MatchGame::with_config(self.take_seed(), self.match_config);
        self.pairs = Some(game);
        self.cursor.reset();
        self.switch(Screen::Pairs);
    }

    pub fn open_menu(&mut self) {
        self.selected = match self.screen {
            Screen::Pairs => MenuEntry::Pairs,
            _ => MenuEntry::Blocks,
        };
        self.blocks = None;
        self.pairs = None;
        self.switch(Screen::Menu);
    }

    fn switch(&mut self, screen: Screen) {
        info!(from = ?self.screen, to = ?screen, "screen change");
        self.screen = screen;
        self.touch();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => self.on_menu_key(key),
            Screen::Blocks => self.on_blocks_key(key),
            Screen::Pairs => self.on_pairs_key(key),
        }
    }

    fn on_menu_key(&mut self, key: KeyEvent) {
        let Some(cmd) = menu_command(key) else {
            return;
        };
        match cmd {
            MenuCommand::Up => self.selected = self.selected.offset(-1),
            MenuCommand::Down => self.selected = self.selected.offset(1),
            MenuCommand::Left | MenuCommand::Right => {
                let step = if cmd == MenuCommand::Left { 2 } else { 1 };
                let idx = Difficulty::ALL
                    .iter()
                    .position(|d| *d == self.match_config.difficulty)
                    .unwrap_or(0);
                self.match_config.difficulty = Difficulty::ALL[(idx + step) % Difficulty::ALL.len()];
            }
            MenuCommand::Select => match self.selected {
                MenuEntry::Blocks => return self.open_blocks(),
                MenuEntry::Pairs => return self.open_pairs(),
                MenuEntry::Quit => self.should_quit = true,
            },
        }
        self.touch();
    }

    fn on_blocks_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M')) {
            self.open_menu();
            return;
        }
        if let (Some(game), Some(action)) = (self.blocks.as_mut(), blocks_action(key)) {
            if !game.apply_action(action) {
                trace!(action = action.as_str(), "action ignored");
            }
        }
    }

    fn on_pairs_key(&mut self, key: KeyEvent) {
        let Some(cmd) = pairs_command(key) else {
            return;
        };
        match cmd {
            PairsCommand::Move(mv) => {
                self.cursor.apply(mv);
                self.touch();
            }
            PairsCommand::Flip => {
                let position = self.cursor.position();
                if let Some(game) = self.pairs.as_mut() {
                    if let Err(reason) = game.flip(position) {
                        trace!(position, %reason, "flip rejected");
                    }
                }
            }
            PairsCommand::Rematch => {
                if let Some(game) = self.pairs.as_mut() {
                    game.restart();
                }
                self.cursor.reset();
                self.touch();
            }
            PairsCommand::Menu => self.open_menu(),
        }
    }

    /// Advance the running game by `elapsed_ms`
    pub fn on_tick(&mut self, elapsed_ms: u32) {
        match self.screen {
            Screen::Menu => {}
            Screen::Blocks => {
                if let Some(game) = self.blocks.as_mut() {
                    game.tick(elapsed_ms);
                }
            }
            Screen::Pairs => {
                if let Some(game) = self.pairs.as_mut() {
                    game.tick(elapsed_ms);
                }
            }
        }
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match (self.screen, &self.blocks, &self.pairs) {
            (Screen::Blocks, Some(game), _) => {
                self.blocks_view.render_into(&game.snapshot(), viewport, fb)
            }
            (Screen::Pairs, _, Some(game)) => {
                self.pairs_view
                    .render_into(&game.snapshot(), self.cursor.position(), viewport, fb)
            }
            _ => self
                .menu_view
                .render_into(self.selected, self.match_config.difficulty, viewport, fb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardState;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn app() -> App {
        App::new(7, MatchConfig::default(), BlocksConfig::default())
    }

    #[test]
    fn menu_opens_blocks() {
        let mut app = app();
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Blocks);
        assert!(app.blocks().unwrap().started());
    }

    #[test]
    fn menu_changes_difficulty_then_opens_pairs() {
        let mut app = app();
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Right));
        app.on_key(key(KeyCode::Enter));

        assert_eq!(app.screen(), Screen::Pairs);
        assert_eq!(app.pairs().unwrap().difficulty(), Difficulty::Normal);
    }

    #[test]
    fn difficulty_wraps_left() {
        let mut app = app();
        app.on_key(key(KeyCode::Left));
        assert_eq!(app.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn pairs_cursor_flips_card() {
        let mut app = app();
        app.open_pairs();
        app.on_key(key(KeyCode::Right));
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Char(' ')));

        let pos = TABLE_COLS + 1;
        assert_eq!(app.cursor().position(), pos);
        assert_eq!(app.pairs().unwrap().state(pos), Some(CardState::FaceUp));
    }

    #[test]
    fn quit_from_any_screen() {
        let mut app = app();
        app.open_blocks();
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn menu_key_returns_from_pairs() {
        let mut app = app();
        app.open_pairs();
        app.on_key(key(KeyCode::Char('m')));
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.pairs().is_none());
    }

    #[test]
    fn revision_moves_with_cursor() {
        let mut app = app();
        app.open_pairs();
        let before = app.revision();
        app.on_key(key(KeyCode::Left));
        assert_ne!(app.revision(), before);
    }
}
