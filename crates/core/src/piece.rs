//! The active-piece controller.
//!
//! Owns the state of the currently falling piece and runs a per-frame
//! update: consume the frame's input snapshot, apply timed gravity
//! stepping, rotate with wall-kick validation, and hand off to the host's
//! [`Board`] for occupancy validation and placement.
//!
//! All timers are wall-clock marks compared against the frame-provided
//! `now`; deltas are variable and unclamped. A long frame can satisfy
//! several thresholds at once, but each check runs once per update, so at
//! most one gravity step and one rotation happen per frame.

use tetro_control_types::{
    CellOffset, GridPos, InputSnapshot, DEFAULT_LOCK_DELAY, DEFAULT_MOVE_DELAY,
    DEFAULT_STEP_DELAY, HELD_REPEAT_DELAY, ROTATION_STATES,
};

use crate::board::Board;
use crate::definition::{wall_kick_row, PieceDefinition};
use crate::rotation::{rotate_cells, wrap};

/// Whether the piece is still falling after an update.
///
/// `Locked` is terminal for this piece's identity: the footprint has been
/// committed, lines cleared, and a spawn requested. The host reinitializes
/// the controller for the next piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceStatus {
    Falling,
    Locked,
}

/// Tunable delays, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceTiming {
    /// Gravity cadence: one downward step per interval.
    pub step_delay: f32,
    /// Minimum spacing between accepted moves.
    pub move_delay: f32,
    /// How long a piece may sit without a successful move before locking.
    pub lock_delay: f32,
}

impl Default for PieceTiming {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            move_delay: DEFAULT_MOVE_DELAY,
            lock_delay: DEFAULT_LOCK_DELAY,
        }
    }
}

/// Directional buttons held during the current frame.
#[derive(Debug, Clone, Copy, Default)]
struct Held {
    left: bool,
    right: bool,
    down: bool,
}

impl Held {
    fn any(self) -> bool {
        self.left || self.right || self.down
    }
}

/// The currently falling piece and its per-frame control logic.
#[derive(Debug, Clone)]
pub struct ActivePiece {
    definition: &'static PieceDefinition,
    timing: PieceTiming,
    /// Cell offsets from `position`; mutated only by rotation.
    cells: [CellOffset; 4],
    /// Board coordinate of the piece origin; mutated only by validated
    /// moves.
    position: GridPos,
    /// Rotation state in [0, 4), wrapped, never clamped.
    rotation_index: i32,
    /// Next gravity step fires when `now` passes this mark.
    step_time: f32,
    /// Held-direction input is processed when `now` passes this mark plus
    /// `repeat_delay`.
    move_time: f32,
    /// Seconds since the last successful move; locking compares this
    /// against the lock delay.
    lock_time: f32,
    /// Extra delay after the first accepted move of a held direction.
    repeat_delay: f32,
    /// Consecutive same-hold move attempts; reset by directional
    /// down-edges.
    step: u32,
    held: Held,
    locked: bool,
}

impl ActivePiece {
    /// Create a controller for a freshly spawned piece.
    pub fn spawn(
        definition: &'static PieceDefinition,
        position: GridPos,
        timing: PieceTiming,
        now: f32,
    ) -> Self {
        let mut piece = Self {
            definition,
            timing,
            cells: definition.cells,
            position,
            rotation_index: 0,
            step_time: 0.0,
            move_time: 0.0,
            lock_time: 0.0,
            repeat_delay: 0.0,
            step: 0,
            held: Held::default(),
            locked: false,
        };
        piece.initialize(definition, position, now);
        piece
    }

    /// Rebind the controller to the next piece after a lock.
    ///
    /// Resets rotation and cells from the definition, arms the gravity and
    /// move timers relative to `now`, and zeroes the lock timer. No
    /// validation happens here; the host is responsible for the legality of
    /// the spawn position. Input-repeat state (`step`, `repeat_delay`)
    /// deliberately survives, since a direction can stay held across the
    /// handoff.
    pub fn initialize(
        &mut self,
        definition: &'static PieceDefinition,
        position: GridPos,
        now: f32,
    ) {
        self.definition = definition;
        self.position = position;
        self.rotation_index = 0;
        self.cells = definition.cells;
        self.step_time = now + self.timing.step_delay;
        self.move_time = now + self.timing.move_delay;
        self.lock_time = 0.0;
        self.locked = false;
    }

    pub fn definition(&self) -> &'static PieceDefinition {
        self.definition
    }

    pub fn cells(&self) -> &[CellOffset; 4] {
        &self.cells
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    pub fn rotation_index(&self) -> i32 {
        self.rotation_index
    }

    pub fn lock_time(&self) -> f32 {
        self.lock_time
    }

    pub fn repeat_delay(&self) -> f32 {
        self.repeat_delay
    }

    pub fn move_step(&self) -> u32 {
        self.step
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Per-frame update.
    ///
    /// Clears the piece's footprint so validity checks do not self-collide,
    /// processes the input snapshot and timers, and re-stamps the footprint
    /// before returning. Returns [`PieceStatus::Locked`] the moment a lock
    /// fires (the lock itself stamps the final footprint); updating a
    /// locked controller is a no-op.
    pub fn update<B: Board>(
        &mut self,
        board: &mut B,
        input: &InputSnapshot,
        now: f32,
        delta: f32,
    ) -> PieceStatus {
        if self.locked {
            return PieceStatus::Locked;
        }

        board.clear(&self.cells, self.position);

        // The lock timer lets the player keep adjusting a landed piece
        // until the delay runs out.
        self.lock_time += delta;

        self.held = Held {
            left: input.left_held,
            right: input.right_held,
            down: input.down_held,
        };
        if input.direction_pressed {
            self.step = 0;
        }
        if input.direction_released {
            self.repeat_delay = 0.0;
        }

        // At most one rotation per frame; left wins over right.
        if input.rotate_left {
            self.rotate(board, -1, now);
        } else if input.rotate_right {
            self.rotate(board, 1, now);
        }

        if input.hard_drop {
            self.hard_drop(board, now);
            return PieceStatus::Locked;
        }

        if now > self.move_time + self.repeat_delay {
            self.handle_held_directions(board, now);
        }

        if now > self.step_time {
            self.gravity_step(board, now);
            if self.locked {
                return PieceStatus::Locked;
            }
        }

        board.set(&self.cells, self.position);
        PieceStatus::Falling
    }

    /// Process held directional buttons: soft drop first, then left, then
    /// right (left and right are mutually exclusive within a frame).
    fn handle_held_directions<B: Board>(&mut self, board: &mut B, now: f32) {
        if self.held.down {
            self.step += 1;
            if self.try_move(board, (0, -1), now) {
                // Re-arm gravity so a soft drop and a gravity step cannot
                // both move the piece down in the same frame.
                self.step_time = now + self.timing.step_delay;
            }
        }

        if self.held.left {
            self.step += 1;
            let _ = self.try_move(board, (-1, 0), now);
        } else if self.held.right {
            self.step += 1;
            let _ = self.try_move(board, (1, 0), now);
        }
    }

    /// The single choke point for position changes.
    ///
    /// Validates the candidate position with the board. On success the
    /// position is committed, the move timer re-arms, and the lock timer
    /// resets, giving a fresh lock-delay window (rotations and wall kicks
    /// reuse this primitive, so they reset it too). The auto-repeat delay
    /// is re-evaluated whether or not the move succeeded.
    pub fn try_move<B: Board>(&mut self, board: &B, translation: CellOffset, now: f32) -> bool {
        let candidate = (
            self.position.0 + translation.0,
            self.position.1 + translation.1,
        );
        let valid = board.is_valid_position(&self.cells, candidate);

        if valid {
            self.position = candidate;
            self.move_time = now + self.timing.move_delay;
            self.lock_time = 0.0;
        }

        // The repeat delay arms only on the transition into the first held
        // move; any other state drops it back to zero.
        if self.repeat_delay == 0.0 && self.step == 1 && self.held.any() {
            self.repeat_delay = HELD_REPEAT_DELAY;
        } else {
            self.repeat_delay = 0.0;
        }

        valid
    }

    /// Rotate one quarter turn; `direction` is -1 (counter-clockwise) or
    /// +1 (clockwise).
    ///
    /// Either some wall-kick candidate validates and the new orientation
    /// sticks, or the rotation index and cells are restored exactly. No
    /// partial rotation ever persists.
    pub fn rotate<B: Board>(&mut self, board: &B, direction: i32, now: f32) {
        let original_rotation = self.rotation_index;

        self.rotation_index = wrap(self.rotation_index + direction, 0, ROTATION_STATES);
        rotate_cells(&mut self.cells, direction, self.definition.offset_center());

        if !self.test_wall_kicks(board, self.rotation_index, direction, now) {
            self.rotation_index = original_rotation;
            // The negated direction is an exact inverse of the transform.
            rotate_cells(&mut self.cells, -direction, self.definition.offset_center());
        }
    }

    /// Try each kick candidate for this transition, in order, through
    /// `try_move`; the first success wins. The zero offset comes first in
    /// every row, covering the no-kick case.
    fn test_wall_kicks<B: Board>(
        &mut self,
        board: &B,
        rotation_index: i32,
        direction: i32,
        now: f32,
    ) -> bool {
        let row = wall_kick_row(rotation_index, direction);
        for &translation in self.definition.wall_kicks[row].iter() {
            if self.try_move(board, translation, now) {
                return true;
            }
        }
        false
    }

    /// One gravity step: re-arm the step timer, attempt a downward move
    /// (an already-landed piece simply fails to move), then lock if the
    /// piece has been idle for the full lock delay.
    fn gravity_step<B: Board>(&mut self, board: &mut B, now: f32) {
        self.step_time = now + self.timing.step_delay;

        let _ = self.try_move(board, (0, -1), now);

        if self.lock_time >= self.timing.lock_delay {
            self.lock(board);
        }
    }

    /// Drop to the lowest legal row and lock immediately.
    pub fn hard_drop<B: Board>(&mut self, board: &mut B, now: f32) {
        while self.try_move(board, (0, -1), now) {}
        self.lock(board);
    }

    /// Commit the footprint, clear completed lines, request the next
    /// piece. Synchronous and non-cancelable.
    pub fn lock<B: Board>(&mut self, board: &mut B) {
        board.set(&self.cells, self.position);
        board.clear_lines();
        board.spawn_piece();
        self.locked = true;
    }
}
