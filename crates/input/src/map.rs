//! Key mapping from terminal events to game commands.

use crate::types::BlocksAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One-step cursor movement on a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Commands on the pairs table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairsCommand {
    Move(CursorMove),
    /// Flip the card under the cursor
    Flip,
    /// Deal a new table at the same difficulty
    Rematch,
    /// Back to the start menu
    Menu,
}

/// Commands on the start menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Up,
    Down,
    /// Cycle the highlighted option (difficulty)
    Left,
    Right,
    Select,
}

/// Map keyboard input to falling-block actions.
pub fn blocks_action(key: KeyEvent) -> Option<BlocksAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(BlocksAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(BlocksAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(BlocksAction::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(BlocksAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(BlocksAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(BlocksAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BlocksAction::Restart),

        _ => None,
    }
}

fn cursor_move(code: KeyCode) -> Option<CursorMove> {
    match code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(CursorMove::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(CursorMove::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(CursorMove::Right),
        _ => None,
    }
}

/// Map keyboard input to pairs-table commands.
pub fn pairs_command(key: KeyEvent) -> Option<PairsCommand> {
    if let Some(mv) = cursor_move(key.code) {
        return Some(PairsCommand::Move(mv));
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(PairsCommand::Flip),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PairsCommand::Rematch),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => Some(PairsCommand::Menu),
        _ => None,
    }
}

/// Map keyboard input to start-menu commands.
pub fn menu_command(key: KeyEvent) -> Option<MenuCommand> {
    match (cursor_move(key.code), key.code) {
        (Some(CursorMove::Up), _) => Some(MenuCommand::Up),
        (Some(CursorMove::Down), _) => Some(MenuCommand::Down),
        (Some(CursorMove::Left), _) => Some(MenuCommand::Left),
        (Some(CursorMove::Right), _) => Some(MenuCommand::Right),
        (None, KeyCode::Char(' ') | KeyCode::Enter) => Some(MenuCommand::Select),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
