//! Views and the app render path, without a terminal

use crossterm::event::{KeyCode, KeyEvent};

use tui_minigames::app::{App, Screen};
use tui_minigames::core::{BlocksConfig, BlocksGame, MatchConfig, MatchGame};
use tui_minigames::term::{
    changed_runs, BlocksView, FrameBuffer, MenuEntry, MenuView, PairsView, Viewport,
};
use tui_minigames::types::{BlocksAction, Difficulty};

#[test]
fn blocks_view_shows_panel_after_drop() {
    let mut game = BlocksGame::new(5);
    game.start();
    game.apply_action(BlocksAction::HardDrop);

    let fb = BlocksView::default().render(&game.snapshot(), Viewport::new(80, 26));
    assert!(fb.contains_text("SCORE"));
    assert!(fb.contains_text("LINES"));
    assert!(fb.contains_text("1000ms"));
}

#[test]
fn pairs_view_tracks_cursor_and_faces() {
    let mut game = MatchGame::new(6);
    let (a, b) = game.deck().positions_of(2).unwrap();
    game.flip(a).unwrap();
    game.flip(b).unwrap();
    game.tick(1000);

    let view = PairsView::new();
    let fb = view.render(&game.snapshot(), 0, Viewport::new(100, 30));
    assert!(fb.contains_text("You 1"));
    assert!(fb.contains_text("Pairs left 25"));

    let moved = view.render(&game.snapshot(), 1, Viewport::new(100, 30));
    let runs = changed_runs(&fb, &moved);
    // At most the old and new cursor cards repaint.
    assert!(runs.len() <= 2);
}

#[test]
fn menu_view_lists_games() {
    let fb = MenuView::new().render(MenuEntry::Blocks, Difficulty::Easy, Viewport::new(80, 24));
    assert!(fb.contains_text("> Falling blocks"));
    assert!(fb.contains_text("Pairs vs computer"));
    assert!(fb.contains_text("Quit"));
}

#[test]
fn app_renders_each_screen() {
    let mut app = App::new(1, MatchConfig::default(), BlocksConfig::default());
    let viewport = Viewport::new(100, 30);
    let mut fb = FrameBuffer::new(0, 0);

    app.render_into(viewport, &mut fb);
    assert!(fb.contains_text("TERMINAL MINIGAMES"));

    app.on_key(KeyEvent::from(KeyCode::Enter));
    assert_eq!(app.screen(), Screen::Blocks);
    app.render_into(viewport, &mut fb);
    assert!(fb.contains_text("SCORE"));

    app.on_key(KeyEvent::from(KeyCode::Esc));
    app.on_key(KeyEvent::from(KeyCode::Down));
    app.on_key(KeyEvent::from(KeyCode::Enter));
    assert_eq!(app.screen(), Screen::Pairs);
    app.render_into(viewport, &mut fb);
    assert!(fb.contains_text("PAIRS"));
    assert_eq!((fb.width(), fb.height()), (100, 30));
}
