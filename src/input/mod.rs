//! Input module - keyboard bindings and held-key state
//!
//! Discrete intents come from `map`; the session's own auto-repeat is fed
//! by the `held` tracker, which also papers over terminals that never
//! deliver key-release events.

pub mod held;
pub mod map;

pub use held::HeldTracker;
pub use map::{handle_key_event, should_quit};
