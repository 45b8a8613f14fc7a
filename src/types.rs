//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (columns x visible rows)
pub const BOARD_WIDTH: i8 = 10;
pub const BOARD_HEIGHT: i8 = 20;

/// Spawn anchor for every new piece (mask cells sit above the visible top)
pub const SPAWN_X: i8 = 5;
pub const SPAWN_Y: i8 = 0;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const FALL_INTERVAL_START_MS: u32 = 270;
pub const FALL_INTERVAL_FLOOR_MS: u32 = 120;
pub const FALL_INTERVAL_STEP_MS: u32 = 1;
pub const LEVEL_UP_INTERVAL_MS: u32 = 20_000;

/// Grounded gravity ticks tolerated before a lock is committed
pub const GROUNDED_GRACE_TICKS: u8 = 1;

/// Game-over screen pacing (in milliseconds)
pub const GAME_OVER_LINGER_MS: u64 = 800;
pub const HIGH_SCORE_LINGER_MS: u64 = 1400;

/// 24-bit color used for locked cells and piece rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    I,
    O,
    J,
    L,
    T,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];
}

/// Discrete player intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Hold,
    Pause,
}

/// Direction keys currently held down, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub down: bool,
}

impl HeldKeys {
    pub const NONE: HeldKeys = HeldKeys {
        left: false,
        right: false,
        down: false,
    };
}
