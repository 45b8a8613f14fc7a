//! Blockfall: a terminal falling-block puzzle game.
//!
//! The deterministic game rules live in `core`, terminal rendering in `term`,
//! key handling in `input` and high-score persistence in `score`. The binary
//! wires them together into a fixed-tick loop.

pub mod core;
pub mod input;
pub mod score;
pub mod term;
pub mod types;
