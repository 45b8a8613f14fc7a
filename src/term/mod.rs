//! Terminal rendering layer.
//!
//! Renders into a plain framebuffer that is then flushed to the terminal,
//! so `core` stays deterministic and the view code stays unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
