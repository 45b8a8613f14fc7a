//! Integration tests for the game session driven through its public API

use blockfall::core::Session;
use blockfall::input::HeldTracker;
use blockfall::types::{GameAction, PieceKind, Rgb, SPAWN_X, SPAWN_Y, TICK_MS};

/// Scan seeds until a session opens with the wanted piece kind.
fn session_opening_with(kind: PieceKind) -> Session {
    for seed in 1..10_000 {
        let session = Session::new(seed);
        if session.active().kind == kind {
            return session;
        }
    }
    panic!("no seed produced {:?}", kind);
}

#[test]
fn test_new_session_defaults() {
    let session = Session::new(12345);

    assert_eq!(session.score(), 0);
    assert_eq!(session.level(), 1);
    assert!(!session.paused());
    assert!(!session.game_over());
    assert!(session.board().is_empty());
    assert!(session.held_piece().is_none());

    let active = session.active();
    assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
}

#[test]
fn test_movement_actions_shift_the_active_piece() {
    let mut session = Session::new(12345);

    session.apply(GameAction::MoveLeft);
    assert_eq!(session.active().x, SPAWN_X - 1);

    session.apply(GameAction::MoveRight);
    session.apply(GameAction::MoveRight);
    assert_eq!(session.active().x, SPAWN_X + 1);

    session.apply(GameAction::SoftDrop);
    assert_eq!(session.active().y, SPAWN_Y + 1);
}

#[test]
fn test_hard_drop_commits_at_the_floor() {
    let mut session = session_opening_with(PieceKind::O);
    let yellow = Rgb::new(255, 255, 0);
    let upcoming = session.next_piece().kind;

    session.apply(GameAction::HardDrop);

    // O fills a 2x2 block in columns 4..=5 at the bottom.
    assert_eq!(session.board().len(), 4);
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(session.board().color_at(x, y), Some(yellow), "({}, {})", x, y);
    }

    // The preview piece is promoted and respawns at the anchor.
    let active = session.active();
    assert_eq!(active.kind, upcoming);
    assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
    assert!(!session.game_over());
}

#[test]
fn test_hold_swaps_active_with_preview() {
    let mut session = Session::new(777);
    let first = session.active().kind;
    let upcoming = session.next_piece().kind;

    session.apply(GameAction::Hold);

    assert_eq!(session.held_piece().map(|p| p.kind), Some(first));
    assert_eq!(session.active().kind, upcoming);

    // A second hold before locking is refused.
    session.apply(GameAction::Hold);
    assert_eq!(session.held_piece().map(|p| p.kind), Some(first));
    assert_eq!(session.active().kind, upcoming);
}

#[test]
fn test_pause_toggles() {
    let mut session = Session::new(1);
    assert!(!session.paused());

    session.apply(GameAction::Pause);
    assert!(session.paused());

    session.apply(GameAction::Pause);
    assert!(!session.paused());
}

#[test]
fn test_held_tracker_feeds_session_repeats() {
    use crossterm::event::KeyCode;

    let mut session = Session::new(12345);
    let mut tracker = HeldTracker::new();

    // The press edge applies one soft drop directly.
    let action = tracker.handle_key_press(KeyCode::Down);
    assert_eq!(action, Some(GameAction::SoftDrop));
    session.apply(GameAction::SoftDrop);
    assert_eq!(session.active().y, SPAWN_Y + 1);

    // Re-pressing while held produces no second edge.
    assert_eq!(tracker.handle_key_press(KeyCode::Down), None);

    // Held long enough, the session repeats the drop on its own clock:
    // 9 ticks x 16ms = 144ms, past the half-interval repeat threshold.
    for _ in 0..9 {
        session.tick(TICK_MS, tracker.held());
    }
    assert_eq!(session.active().y, SPAWN_Y + 2);
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut session = Session::new(424242);

    // Without lateral movement every piece lands on the same few columns,
    // so the stack must reach the hidden rows eventually.
    for _ in 0..60 {
        session.apply(GameAction::HardDrop);
        if session.game_over() {
            break;
        }
    }
    assert!(session.game_over());

    // A finished session ignores further input.
    let frozen = session.active();
    session.apply(GameAction::MoveLeft);
    session.apply(GameAction::HardDrop);
    assert_eq!(session.active(), frozen);
}
