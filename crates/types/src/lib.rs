//! Shared types and timing constants for the falling-piece controller.
//!
//! Pure data with no external dependencies, usable from the core controller,
//! the input latch, tests, and benches alike.
//!
//! # Coordinates
//!
//! The grid is y-up: x grows rightward, y grows upward, so gravity moves a
//! piece toward smaller y. Cell offsets and wall-kick data are expressed in
//! this system.
//!
//! # Timing constants
//!
//! All timers are f32 wall-clock marks in seconds, compared against a
//! monotonically increasing frame-provided "now". Frame deltas are variable
//! and unclamped.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_STEP_DELAY` | 1.0 | Gravity cadence (one row per step) |
//! | `DEFAULT_MOVE_DELAY` | 0.1 | Minimum spacing between accepted moves |
//! | `DEFAULT_LOCK_DELAY` | 0.5 | Idle time before a landed piece locks |
//! | `HELD_REPEAT_DELAY` | 0.1 | Extra delay after the first held move |
//!
//! # Examples
//!
//! ```
//! use tetro_control_types::{Button, ShapeKind, ROTATION_STATES};
//!
//! assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
//! assert_eq!(ShapeKind::T.as_str(), "t");
//! assert_eq!(Button::RotateLeft.is_directional(), false);
//! assert_eq!(ROTATION_STATES, 4);
//! ```

/// Offset of a single cell relative to the piece origin, (x, y), y-up.
pub type CellOffset = (i32, i32);

/// Absolute board coordinate of a piece origin, (x, y), y-up.
pub type GridPos = (i32, i32);

/// Number of distinct rotation states; `rotation_index` wraps into [0, 4).
pub const ROTATION_STATES: i32 = 4;

/// Default gravity step cadence in seconds.
pub const DEFAULT_STEP_DELAY: f32 = 1.0;

/// Default minimum spacing between accepted moves in seconds.
pub const DEFAULT_MOVE_DELAY: f32 = 0.1;

/// Default lock delay in seconds. A landed piece locks once it has gone
/// this long without a successful move.
pub const DEFAULT_LOCK_DELAY: f32 = 0.5;

/// Secondary delay imposed after the very first accepted move of a held
/// direction, producing the initial-delay-then-fast-repeat feel.
pub const HELD_REPEAT_DELAY: f32 = 0.1;

/// The seven tetromino shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All shapes, in definition order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse a shape from its letter (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Lowercase letter for this shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }

    /// Whether this shape rotates about a half-integer-offset center.
    ///
    /// The square and the long bar have bounding boxes centered between
    /// cells, so their rotation subtracts 0.5 from both coordinates before
    /// the matrix is applied and rounds the result with ceiling.
    pub fn offset_center(&self) -> bool {
        matches!(self, ShapeKind::I | ShapeKind::O)
    }
}

/// Player-facing buttons the controller reacts to.
///
/// The directional buttons (left, right, soft-drop) are held-state buttons
/// with both down and up edges; the rest are one-shot, latched on the down
/// edge and consumed by the next frame's update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateLeft,
    RotateRight,
}

impl Button {
    /// True for the held-state buttons that track press and release.
    pub fn is_directional(&self) -> bool {
        matches!(self, Button::MoveLeft | Button::MoveRight | Button::SoftDrop)
    }
}

/// Immutable per-frame view of player input, consumed by the controller's
/// update.
///
/// Held flags reflect buttons that are currently down. The one-shot flags
/// (`rotate_left`, `rotate_right`, `hard_drop`) and the two edge markers are
/// drained when the snapshot is taken, so each press is seen by exactly one
/// frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left_held: bool,
    pub right_held: bool,
    pub down_held: bool,
    /// Rotate counter-clockwise this frame. Takes priority over
    /// `rotate_right` when both are set.
    pub rotate_left: bool,
    /// Rotate clockwise this frame.
    pub rotate_right: bool,
    pub hard_drop: bool,
    /// A directional button went down since the last snapshot; resets the
    /// controller's consecutive-move counter.
    pub direction_pressed: bool,
    /// A directional button went up since the last snapshot; resets the
    /// auto-repeat delay.
    pub direction_released: bool,
}

impl InputSnapshot {
    /// True if any directional button is held.
    pub fn any_direction_held(&self) -> bool {
        self.left_held || self.right_held || self.down_held
    }
}
