//! Keyboard bindings for game controls.
//!
//! Arrows and wasd/hjkl aliases move, `w`/Up rotates, Space hard-drops,
//! `c` holds, `p`/Esc pauses. Quit (`q` or Ctrl-C) is its own check so the
//! caller can honor it from any screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

const BINDINGS: &[(&[KeyCode], GameAction)] = &[
    (
        &[KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('a')],
        GameAction::MoveLeft,
    ),
    (
        &[KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('d')],
        GameAction::MoveRight,
    ),
    (
        &[KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('s')],
        GameAction::SoftDrop,
    ),
    (
        &[KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('w')],
        GameAction::Rotate,
    ),
    (&[KeyCode::Char(' ')], GameAction::HardDrop),
    (
        &[KeyCode::Char('c'), KeyCode::Char('C')],
        GameAction::Hold,
    ),
    (
        &[KeyCode::Char('p'), KeyCode::Char('P'), KeyCode::Esc],
        GameAction::Pause,
    ),
];

/// Look up the game action bound to a key, if any.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    BINDINGS
        .iter()
        .find(|(codes, _)| codes.contains(&key.code))
        .map(|&(_, action)| action)
}

/// Quit keys work on every screen: `q` or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
