//! Seeded pseudo-random piece selection.
//!
//! Piece draws only need a uniform pick among 7 kinds, so a 32-bit linear
//! congruential generator is enough and keeps the core dependency-free. A
//! fixed seed replays the same piece stream, which the tests rely on.

/// 32-bit LCG with the Numerical Recipes multiplier and increment.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed 0 is remapped to 1 so the stream never starts degenerate.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-enough value in `[0, max)`; `max` is 7 here, so the modulo
    /// bias is negligible.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
