//! Falling-piece control logic: pure, deterministic, and testable.
//!
//! This crate owns the state machine of a single falling tetromino and
//! nothing else. The occupancy grid, line clearing, and spawning belong to
//! the host, reached through the [`Board`] trait.
//!
//! # Module structure
//!
//! - [`rotation`]: the pure rotation-matrix transform and modular wrap
//! - [`definition`]: static per-shape cell offsets and wall-kick tables
//! - [`board`]: the [`Board`] capability plus a reference [`GridBoard`]
//! - [`piece`]: the [`ActivePiece`] controller and its per-frame update
//!
//! # Example
//!
//! ```
//! use tetro_control_core::{ActivePiece, GridBoard, PieceDefinition, PieceTiming};
//! use tetro_control_types::{InputSnapshot, ShapeKind};
//!
//! let mut board = GridBoard::new(10, 20);
//! let mut piece = ActivePiece::spawn(
//!     PieceDefinition::of(ShapeKind::T),
//!     (4, 17),
//!     PieceTiming::default(),
//!     0.0,
//! );
//!
//! // One frame with no input: footprint is stamped, nothing moves yet.
//! let input = InputSnapshot::default();
//! piece.update(&mut board, &input, 0.016, 0.016);
//! assert_eq!(piece.position(), (4, 17));
//! ```

pub mod board;
pub mod definition;
pub mod piece;
pub mod rotation;

pub use board::{Board, GridBoard};
pub use definition::{wall_kick_row, KickRow, PieceDefinition, WallKickTable};
pub use piece::{ActivePiece, PieceStatus, PieceTiming};
pub use rotation::{rotate_cell, rotate_cells, wrap};
