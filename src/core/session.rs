//! Session module - the complete game state machine
//!
//! Ties together board, pieces and RNG, and owns everything that changes
//! while playing: gravity and level timers, the grounded-lock countdown,
//! discrete intents, held-key auto-repeat, hold, scoring and loss. All
//! timing state lives here as u32 millisecond accumulators fed by the
//! caller; the session never reads a clock, so a fixed seed replays the
//! same game for any fixed input schedule.

use crate::core::board::Board;
use crate::core::pieces::{random_piece, Piece};
use crate::core::rng::SimpleRng;
use crate::types::{
    GameAction, HeldKeys, FALL_INTERVAL_FLOOR_MS, FALL_INTERVAL_START_MS, FALL_INTERVAL_STEP_MS,
    GROUNDED_GRACE_TICKS, LEVEL_UP_INTERVAL_MS,
};

/// One game from first spawn to game over
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Piece,
    next: Piece,
    /// Piece parked by the hold action, always spawn-anchored
    held: Option<Piece>,
    rng: SimpleRng,
    score: u32,
    /// Climbs while every lock clears exactly 4 rows, never below 1
    score_factor: u32,
    /// Display level, starts at 1 and follows the speed-up schedule
    level: u32,
    /// Current gravity period; shrinks with the level down to the floor
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    level_timer_ms: u32,
    /// Shared accumulator for all held-key auto-repeat
    held_timer_ms: u32,
    /// Consecutive gravity ticks the piece failed to descend
    grounded_ticks: u8,
    paused: bool,
    game_over: bool,
    /// Hold already spent for the current piece
    hold_used: bool,
    /// A discrete lateral press landed since the last tick; suppresses
    /// lateral auto-repeat for that tick
    lateral_move_this_tick: bool,
}

impl Session {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = random_piece(&mut rng);
        let next = random_piece(&mut rng);

        Self {
            board: Board::new(),
            active,
            next,
            held: None,
            rng,
            score: 0,
            score_factor: 1,
            level: 1,
            fall_interval_ms: FALL_INTERVAL_START_MS,
            fall_timer_ms: 0,
            level_timer_ms: 0,
            held_timer_ms: 0,
            grounded_ticks: 0,
            paused: false,
            game_over: false,
            hold_used: false,
            lateral_move_this_tick: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    pub fn held_piece(&self) -> Option<Piece> {
        self.held
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Advance one tick. `elapsed_ms` is whatever the caller measured; the
    /// session only accumulates it and never assumes a fixed frame length.
    pub fn tick(&mut self, elapsed_ms: u32, held: HeldKeys) {
        if self.game_over {
            return;
        }

        let mut lock_pending = false;

        if !self.paused {
            self.fall_timer_ms += elapsed_ms;
            self.level_timer_ms += elapsed_ms;

            // Level-up schedule: shorten the gravity period until the floor.
            if self.level_timer_ms > LEVEL_UP_INTERVAL_MS {
                self.level_timer_ms = 0;
                if self.fall_interval_ms > FALL_INTERVAL_FLOOR_MS {
                    self.fall_interval_ms -= FALL_INTERVAL_STEP_MS;
                    self.level += 1;
                }
            }

            // Gravity.
            if self.fall_timer_ms > self.fall_interval_ms {
                self.fall_timer_ms = 0;
                if self.try_shift(0, 1) {
                    self.grounded_ticks = 0;
                } else if self.grounded_ticks < GROUNDED_GRACE_TICKS {
                    // The first grounded tick is absorbed; the piece can
                    // still slide before the next one commits it.
                    self.grounded_ticks += 1;
                } else {
                    self.grounded_ticks = 0;
                    lock_pending = true;
                }
            }
        }

        // Held-key auto-repeat runs even while paused, like discrete
        // intents; pause freezes gravity and the timers only.
        self.auto_repeat(elapsed_ms, held);
        self.lateral_move_this_tick = false;

        // A gravity-requested lock commits after the input step, so a
        // last-moment slide still counts.
        if lock_pending {
            self.lock_active();
        }
    }

    /// Apply one discrete intent. Returns whether it changed anything.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }

        match action {
            GameAction::MoveLeft => {
                self.note_lateral_press();
                self.try_shift(-1, 0)
            }
            GameAction::MoveRight => {
                self.note_lateral_press();
                self.try_shift(1, 0)
            }
            GameAction::SoftDrop => self.try_shift(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Hold => self.hold(),
            GameAction::Pause => {
                self.paused = !self.paused;
                true
            }
        }
    }

    /// A discrete lateral press restarts the repeat countdown and
    /// suppresses lateral auto-repeat for the tick it lands in.
    fn note_lateral_press(&mut self) {
        self.lateral_move_this_tick = true;
        self.held_timer_ms = 0;
    }

    /// One shared accumulator serves every held direction; each held key
    /// adds the elapsed time and the first to cross half the current fall
    /// interval fires a single step and restarts the countdown. Checked in
    /// order: down, left, right.
    fn auto_repeat(&mut self, elapsed_ms: u32, held: HeldKeys) {
        if held.down {
            self.held_timer_ms += elapsed_ms;
            if self.held_timer_ms > self.fall_interval_ms / 2 {
                self.held_timer_ms = 0;
                self.try_shift(0, 1);
            }
        }
        if held.left && !self.lateral_move_this_tick {
            self.held_timer_ms += elapsed_ms;
            if self.held_timer_ms > self.fall_interval_ms / 2 {
                self.held_timer_ms = 0;
                self.try_shift(-1, 0);
            }
        }
        if held.right && !self.lateral_move_this_tick {
            self.held_timer_ms += elapsed_ms;
            if self.held_timer_ms > self.fall_interval_ms / 2 {
                self.held_timer_ms = 0;
                self.try_shift(1, 0);
            }
        }
    }

    /// Move the active piece by (dx, dy), reverting if the result is
    /// invalid
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        self.active.x += dx;
        self.active.y += dy;
        if self.active.is_valid(&self.board) {
            true
        } else {
            self.active.x -= dx;
            self.active.y -= dy;
            false
        }
    }

    /// Advance the rotation counter, reverting if the new frame does not
    /// fit. No wall kick: a blocked rotation is simply rejected.
    fn try_rotate(&mut self) -> bool {
        self.active.rotation = self.active.rotation.wrapping_add(1);
        if self.active.is_valid(&self.board) {
            true
        } else {
            self.active.rotation = self.active.rotation.wrapping_sub(1);
            false
        }
    }

    /// Drop while the position stays valid, step back once past the first
    /// invalid row, then lock immediately.
    fn hard_drop(&mut self) {
        while self.active.is_valid(&self.board) {
            self.active.y += 1;
        }
        self.active.y -= 1;
        self.lock_active();
    }

    /// Park the active piece in the hold slot, spawn-anchored. Blocked
    /// until the next lock once used. The emerging piece is not validated
    /// against the stack; the loss rule covers the pathological case.
    fn hold(&mut self) -> bool {
        if self.hold_used {
            return false;
        }

        let stored = Piece::spawn(self.active.kind);
        self.active = match self.held.take() {
            Some(incoming) => incoming,
            None => {
                let incoming = self.next;
                self.next = random_piece(&mut self.rng);
                incoming
            }
        };
        self.held = Some(stored);
        self.hold_used = true;
        self.grounded_ticks = 0;
        true
    }

    /// The lock pipeline: commit the piece, promote the preview, clear and
    /// score, then check for loss.
    fn lock_active(&mut self) {
        self.board.commit(&self.active);
        self.active = self.next;
        self.next = random_piece(&mut self.rng);

        let cleared = self.board.clear_full_rows();
        if cleared == 4 {
            self.score_factor += 1;
        } else {
            self.score_factor = 1;
        }
        self.score += cleared * 10 * self.score_factor;

        self.hold_used = false;
        self.grounded_ticks = 0;

        if self.board.overflows_top() {
            self.game_over = true;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
