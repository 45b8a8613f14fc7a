//! Held-key tracking for the session's auto-repeat.
//!
//! Many terminals never send key-release events, so a hold cannot be
//! observed directly. The tracker treats a direction key as held from its
//! press until either a release arrives or no event for that key has been
//! seen for a short timeout; the terminal's own key repeat keeps refreshing
//! the timestamp while the key really is down.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::types::{GameAction, HeldKeys};

const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Down,
}

fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Direction::Down),
        _ => None,
    }
}

/// Tracks which direction keys are currently held.
#[derive(Debug, Clone)]
pub struct HeldTracker {
    held: HeldKeys,
    last_key_time: Instant,
    release_timeout_ms: u32,
}

impl HeldTracker {
    pub fn new() -> Self {
        Self {
            held: HeldKeys::NONE,
            last_key_time: Instant::now(),
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Feed a key press. For direction keys this refreshes the hold; the
    /// discrete action comes back only on the press edge, so the terminal's
    /// key repeat cannot double up with the session's own repeat.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let direction = direction_of(code)?;
        self.last_key_time = Instant::now();

        let (slot, action) = match direction {
            Direction::Left => (&mut self.held.left, GameAction::MoveLeft),
            Direction::Right => (&mut self.held.right, GameAction::MoveRight),
            Direction::Down => (&mut self.held.down, GameAction::SoftDrop),
        };
        if *slot {
            None
        } else {
            *slot = true;
            Some(action)
        }
    }

    /// Feed a key release, for terminals that deliver them.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        match direction_of(code) {
            Some(Direction::Left) => self.held.left = false,
            Some(Direction::Right) => self.held.right = false,
            Some(Direction::Down) => self.held.down = false,
            None => {}
        }
    }

    /// Snapshot for this tick, auto-releasing stale holds first.
    pub fn held(&mut self) -> HeldKeys {
        if self.last_key_time.elapsed().as_millis() as u32 > self.release_timeout_ms {
            self.held = HeldKeys::NONE;
        }
        self.held
    }
}

impl Default for HeldTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_press_edge_yields_action_once() {
        let mut tracker = HeldTracker::new();

        assert_eq!(
            tracker.handle_key_press(KeyCode::Left),
            Some(GameAction::MoveLeft)
        );
        // Terminal auto-repeat of the same key is swallowed.
        assert_eq!(tracker.handle_key_press(KeyCode::Left), None);
        assert!(tracker.held().left);
    }

    #[test]
    fn test_release_clears_hold() {
        let mut tracker = HeldTracker::new();

        tracker.handle_key_press(KeyCode::Down);
        assert!(tracker.held().down);

        tracker.handle_key_release(KeyCode::Down);
        assert!(!tracker.held().down);

        // The next press is an edge again.
        assert_eq!(
            tracker.handle_key_press(KeyCode::Down),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_alias_keys_share_hold_state() {
        let mut tracker = HeldTracker::new();

        tracker.handle_key_press(KeyCode::Char('a'));
        assert!(tracker.held().left);
        tracker.handle_key_release(KeyCode::Left);
        assert!(!tracker.held().left);
    }

    #[test]
    fn test_stale_holds_auto_release() {
        let mut tracker = HeldTracker::new().with_release_timeout_ms(50);

        tracker.handle_key_press(KeyCode::Left);
        tracker.handle_key_press(KeyCode::Down);

        // Simulate silence by moving the last key time into the past.
        tracker.last_key_time = Instant::now() - Duration::from_millis(51);
        assert_eq!(tracker.held(), HeldKeys::NONE);
    }

    #[test]
    fn test_repeat_press_extends_hold() {
        let mut tracker = HeldTracker::new().with_release_timeout_ms(50);

        tracker.handle_key_press(KeyCode::Left);
        tracker.last_key_time = Instant::now() - Duration::from_millis(40);

        // A repeat press refreshes the timestamp, keeping the hold alive.
        assert_eq!(tracker.handle_key_press(KeyCode::Left), None);
        assert!(tracker.held().left);
    }

    #[test]
    fn test_non_direction_keys_ignored() {
        let mut tracker = HeldTracker::new();
        assert_eq!(tracker.handle_key_press(KeyCode::Char(' ')), None);
        assert_eq!(tracker.held(), HeldKeys::NONE);
    }
}
