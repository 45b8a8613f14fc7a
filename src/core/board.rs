//! Board module - the locked-cell map and the lock & clear pipeline
//!
//! The board is sparse: a map from (column, row) keys to the locked color.
//! Columns run 0..9 left to right, rows 0..19 top to bottom, and rows above
//! the visible top are negative. Negative rows are kept in the map; they are
//! what the loss predicate looks at. The dense 10x20 projection used for
//! rendering and row scans is rebuilt on demand, so the map stays the single
//! source of truth.

use std::collections::HashMap;

use arrayvec::ArrayVec;

use crate::core::pieces::Piece;
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Projection sentinel for cells with no locked content
pub const EMPTY: Rgb = Rgb::new(0, 0, 0);

/// Dense projection of the visible window, row-major
pub type Grid = [[Rgb; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The locked-cell store. Mutated only by the lock pipeline (`commit` /
/// `clear_full_rows`) and the `fill` primitive they are built on.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    locked: HashMap<(i8, i8), Rgb>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            locked: HashMap::new(),
        }
    }

    /// Inside the visible window and not locked
    pub fn is_vacant(&self, x: i8, y: i8) -> bool {
        (0..BOARD_WIDTH).contains(&x)
            && (0..BOARD_HEIGHT).contains(&y)
            && !self.locked.contains_key(&(x, y))
    }

    /// Locked color at a cell, if any (negative rows included)
    pub fn color_at(&self, x: i8, y: i8) -> Option<Rgb> {
        self.locked.get(&(x, y)).copied()
    }

    /// Number of locked cells
    pub fn len(&self) -> usize {
        self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }

    /// Insert one locked cell, overwriting whatever was there
    pub fn fill(&mut self, x: i8, y: i8, color: Rgb) {
        self.locked.insert((x, y), color);
    }

    /// Lock all four cells of a piece with its fill color
    pub fn commit(&mut self, piece: &Piece) {
        let color = piece.color();
        for (x, y) in piece.cells() {
            self.fill(x, y, color);
        }
    }

    /// Rebuild the dense projection. Keys outside the visible window are
    /// skipped here but stay in the map.
    pub fn grid(&self) -> Grid {
        let mut grid = [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (&(x, y), &color) in &self.locked {
            if (0..BOARD_WIDTH).contains(&x) && (0..BOARD_HEIGHT).contains(&y) {
                grid[y as usize][x as usize] = color;
            }
        }
        grid
    }

    /// A visible row is full when all 10 of its keys are present
    fn row_full(&self, y: i8) -> bool {
        (0..BOARD_WIDTH).all(|x| self.locked.contains_key(&(x, y)))
    }

    /// Remove every full visible row and re-index the survivors downward.
    /// Each surviving key shifts by the number of cleared rows strictly
    /// below it; keys at or above the topmost cleared row (negative rows
    /// included) therefore shift by the full cleared count. Returns the
    /// number of rows cleared (0 to 4).
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared: ArrayVec<i8, 4> = ArrayVec::new();
        for y in (0..BOARD_HEIGHT).rev() {
            if self.row_full(y) {
                // Fullness was just checked against this same map, so
                // every removal hits a present key.
                for x in 0..BOARD_WIDTH {
                    self.locked.remove(&(x, y));
                }
                cleared.push(y);
            }
        }
        let Some(&top_cleared) = cleared.last() else {
            return 0;
        };

        // Bottom-most keys move first so a move can never land on a key
        // that has not been re-indexed yet.
        let mut keys: Vec<(i8, i8)> = self.locked.keys().copied().collect();
        keys.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        for (x, y) in keys {
            let shift = if y > top_cleared {
                cleared.iter().filter(|&&row| row > y).count() as i8
            } else {
                cleared.len() as i8
            };
            if shift > 0 {
                if let Some(color) = self.locked.remove(&(x, y)) {
                    self.locked.insert((x, y + shift), color);
                }
            }
        }
        cleared.len() as u32
    }

    /// Loss predicate: any locked cell at the top visible row or above it
    pub fn overflows_top(&self) -> bool {
        self.locked.keys().any(|&(_, y)| y < 1)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
