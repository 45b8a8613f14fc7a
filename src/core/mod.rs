//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, clocks, or I/O; time enters only as
//! millisecond deltas handed to `Session::tick`.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use board::{Board, Grid, EMPTY};
pub use pieces::{random_kind, random_piece, Piece, Shape, SHAPES};
pub use rng::SimpleRng;
pub use session::Session;
