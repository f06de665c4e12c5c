//! Rotation math - the pure cell transform and modular wrap.
//!
//! The transform applies the fixed 2D rotation matrix [[0, 1], [-1, 0]]
//! scaled by `direction` (+1 or -1), so one function covers both rotation
//! senses. Two shape families exist:
//!
//! - Offset-center shapes (square and long bar) rotate about a point halfway
//!   between cells: both coordinates are shifted by -0.5 before the matrix
//!   is applied and the result is rounded with ceiling.
//! - Everything else rotates about an integer cell with round-to-nearest.
//!
//! Applying the transform with `direction` and then `-direction` restores
//! every cell exactly, in both families; the rotation revert path depends
//! on this.

use tetro_control_types::CellOffset;

/// The rotation matrix, row-major: [m00, m01, m10, m11].
const ROTATION_MATRIX: [f32; 4] = [0.0, 1.0, -1.0, 0.0];

/// Rotate a single cell offset by 90 degrees in the given direction.
///
/// `direction` must be +1 or -1. `offset_center` selects the half-offset
/// ceiling variant used by the square and long-bar shapes.
pub fn rotate_cell(cell: CellOffset, direction: i32, offset_center: bool) -> CellOffset {
    let d = direction as f32;
    let (mut cx, mut cy) = (cell.0 as f32, cell.1 as f32);

    if offset_center {
        cx -= 0.5;
        cy -= 0.5;
    }

    let rx = cx * ROTATION_MATRIX[0] * d + cy * ROTATION_MATRIX[1] * d;
    let ry = cx * ROTATION_MATRIX[2] * d + cy * ROTATION_MATRIX[3] * d;

    if offset_center {
        (rx.ceil() as i32, ry.ceil() as i32)
    } else {
        (rx.round() as i32, ry.round() as i32)
    }
}

/// Rotate all four cells of a piece in place.
pub fn rotate_cells(cells: &mut [CellOffset; 4], direction: i32, offset_center: bool) {
    for cell in cells.iter_mut() {
        *cell = rotate_cell(*cell, direction, offset_center);
    }
}

/// Wrap `input` into [min, max) with true modular semantics.
///
/// Unlike clamping, values past either bound re-enter from the other side,
/// so `wrap(-1, 0, 4) == 3` and `wrap(4, 0, 4) == 0`.
pub fn wrap(input: i32, min: i32, max: i32) -> i32 {
    if input < min {
        max - (min - input) % (max - min)
    } else {
        min + (input - min) % (max - min)
    }
}
