//! Pieces module - tetromino catalog and the active-piece value type
//!
//! Each kind owns an ordered list of rotation frames; a frame is a 5x5
//! occupancy mask written as five rows ('0' occupied, '.' empty). Only the
//! distinct frames are stored (O has 1, S/Z/I have 2, J/L/T have 4) and the
//! rotation counter indexes them modulo the list length, so rotating past
//! the end wraps around. There is no wall kick: a rotation that would
//! overlap something is simply rejected.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::types::{PieceKind, Rgb, SPAWN_X, SPAWN_Y};

/// One rotation frame: a 5x5 occupancy mask, row-major
pub type Frame = [&'static str; 5];

/// The four grid cells a piece occupies at its current position
pub type PieceCells = ArrayVec<(i8, i8), 4>;

const S_FRAMES: [Frame; 2] = [
    [".....", ".....", "..00.", ".00..", "....."],
    [".....", "..0..", "..00.", "...0.", "....."],
];

const Z_FRAMES: [Frame; 2] = [
    [".....", ".....", ".00..", "..00.", "....."],
    [".....", "..0..", ".00..", ".0...", "....."],
];

const I_FRAMES: [Frame; 2] = [
    ["..0..", "..0..", "..0..", "..0..", "....."],
    [".....", "0000.", ".....", ".....", "....."],
];

const O_FRAMES: [Frame; 1] = [[".....", ".....", ".00..", ".00..", "....."]];

const J_FRAMES: [Frame; 4] = [
    [".....", ".0...", ".000.", ".....", "....."],
    [".....", "..00.", "..0..", "..0..", "....."],
    [".....", ".....", ".000.", "...0.", "....."],
    [".....", "..0..", "..0..", ".00..", "....."],
];

const L_FRAMES: [Frame; 4] = [
    [".....", "...0.", ".000.", ".....", "....."],
    [".....", "..0..", "..0..", "..00.", "....."],
    [".....", ".....", ".000.", ".0...", "....."],
    [".....", ".00..", "..0..", "..0..", "....."],
];

const T_FRAMES: [Frame; 4] = [
    [".....", "..0..", ".000.", ".....", "....."],
    [".....", "..0..", "..00.", "..0..", "....."],
    [".....", ".....", ".000.", "..0..", "....."],
    [".....", "..0..", ".00..", "..0..", "....."],
];

/// Immutable catalog entry for one tetromino kind
#[derive(Debug)]
pub struct Shape {
    pub kind: PieceKind,
    pub frames: &'static [Frame],
    /// Fill color for board cells and the falling piece
    pub color: Rgb,
    /// Darker variant used for the next/hold previews
    pub shadow: Rgb,
}

/// Catalog indexed by `PieceKind` discriminant (same order as `PieceKind::ALL`)
pub static SHAPES: [Shape; 7] = [
    Shape {
        kind: PieceKind::S,
        frames: &S_FRAMES,
        color: Rgb::new(0, 255, 0),
        shadow: Rgb::new(0, 64, 0),
    },
    Shape {
        kind: PieceKind::Z,
        frames: &Z_FRAMES,
        color: Rgb::new(255, 0, 0),
        shadow: Rgb::new(64, 0, 0),
    },
    Shape {
        kind: PieceKind::I,
        frames: &I_FRAMES,
        color: Rgb::new(0, 255, 255),
        shadow: Rgb::new(0, 64, 64),
    },
    Shape {
        kind: PieceKind::O,
        frames: &O_FRAMES,
        color: Rgb::new(255, 255, 0),
        shadow: Rgb::new(64, 64, 0),
    },
    Shape {
        kind: PieceKind::J,
        frames: &J_FRAMES,
        color: Rgb::new(0, 0, 255),
        shadow: Rgb::new(0, 0, 64),
    },
    Shape {
        kind: PieceKind::L,
        frames: &L_FRAMES,
        color: Rgb::new(255, 165, 0),
        shadow: Rgb::new(64, 41, 0),
    },
    Shape {
        kind: PieceKind::T,
        frames: &T_FRAMES,
        color: Rgb::new(128, 0, 128),
        shadow: Rgb::new(32, 0, 32),
    },
];

impl PieceKind {
    /// Catalog entry for this kind
    pub fn shape(self) -> &'static Shape {
        &SHAPES[self as usize]
    }
}

/// Draw a kind uniformly at random
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

/// Draw a random kind anchored at the spawn position
pub fn random_piece(rng: &mut SimpleRng) -> Piece {
    Piece::spawn(random_kind(rng))
}

/// A piece in play: kind plus anchor position and rotation counter.
/// Occupied cells are always derived from the mask, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub rotation: u8,
}

impl Piece {
    /// New piece at the spawn anchor, rotation 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: 0,
        }
    }

    /// Current rotation frame (rotation counter taken modulo the frame
    /// count; all counts divide 256, so the u8 wrap cannot skew this)
    pub fn frame(&self) -> &'static Frame {
        let frames = self.kind.shape().frames;
        &frames[self.rotation as usize % frames.len()]
    }

    /// The four grid cells this piece occupies. Mask cell (row i, col j)
    /// maps to (x + j - 2, y + i - 4); the recentering offsets are fixed by
    /// the catalog's mask layout and must only change together with it.
    pub fn cells(&self) -> PieceCells {
        let mut cells = PieceCells::new();
        for (i, row) in self.frame().iter().enumerate() {
            for (j, byte) in row.bytes().enumerate() {
                if byte == b'0' {
                    cells.push((self.x + j as i8 - 2, self.y + i as i8 - 4));
                }
            }
        }
        cells
    }

    /// Fill color from the catalog
    pub fn color(&self) -> Rgb {
        self.kind.shape().color
    }

    /// Preview (shadow) color from the catalog
    pub fn shadow(&self) -> Rgb {
        self.kind.shape().shadow
    }

    /// A position is valid when every cell is either above the visible top
    /// (row < 0, always permitted) or in-bounds and vacant on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .all(|&(x, y)| y < 0 || board.is_vacant(x, y))
    }
}
