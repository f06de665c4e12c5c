//! Static piece definitions: base cell offsets and wall-kick tables.
//!
//! Each definition holds a shape's four spawn-orientation cell offsets and a
//! reference to its wall-kick table. A table has 8 rows, one per rotation
//! transition (4 rotation states x 2 directions), each row an ordered list
//! of 5 candidate translations. The first candidate is always (0, 0), the
//! "no kick needed" case.

use tetro_control_types::{CellOffset, ShapeKind};

use crate::rotation::wrap;

/// One row of kick candidates, tried in order until a move succeeds.
pub type KickRow = [CellOffset; 5];

/// Full kick table: 8 rotation transitions x 5 candidates.
pub type WallKickTable = [KickRow; 8];

/// Immutable per-shape data supplied to the active-piece controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDefinition {
    pub kind: ShapeKind,
    /// Spawn-orientation cell offsets from the piece origin, y-up.
    pub cells: [CellOffset; 4],
    pub wall_kicks: &'static WallKickTable,
}

impl PieceDefinition {
    /// Look up the static definition for a shape.
    pub fn of(kind: ShapeKind) -> &'static PieceDefinition {
        match kind {
            ShapeKind::I => &I_DEFINITION,
            ShapeKind::O => &O_DEFINITION,
            ShapeKind::T => &T_DEFINITION,
            ShapeKind::S => &S_DEFINITION,
            ShapeKind::Z => &Z_DEFINITION,
            ShapeKind::J => &J_DEFINITION,
            ShapeKind::L => &L_DEFINITION,
        }
    }

    /// Whether this shape rotates about the half-integer-offset center.
    pub fn offset_center(&self) -> bool {
        self.kind.offset_center()
    }
}

/// Kick-table row for a rotation transition.
///
/// The row index is `rotation_index * 2`, decremented by one when rotating
/// counter-clockwise, then wrapped into the table's row range. The
/// `rotation_index` here is the index already advanced to the new state.
pub fn wall_kick_row(rotation_index: i32, direction: i32) -> usize {
    let mut index = rotation_index * 2;
    if direction < 0 {
        index -= 1;
    }
    wrap(index, 0, 8) as usize
}

/// Kick table for the long bar. Rows are ordered for the
/// [`wall_kick_row`] indexing scheme, which keys on the rotation index
/// already advanced to the new state.
static I_WALL_KICKS: WallKickTable = [
    // row 0: 3 -> 0 (clockwise)
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // row 1: 2 -> 1 (counter-clockwise)
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // row 2: 0 -> 1 (clockwise)
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // row 3: 3 -> 2 (counter-clockwise)
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // row 4: 1 -> 2 (clockwise)
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // row 5: 0 -> 3 (counter-clockwise)
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // row 6: 2 -> 3 (clockwise)
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // row 7: 1 -> 0 (counter-clockwise)
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
];

/// Kick table shared by J, L, O, S, T and Z.
static JLOSTZ_WALL_KICKS: WallKickTable = [
    // row 0: 3 -> 0 (clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // row 1: 2 -> 1 (counter-clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // row 2: 0 -> 1 (clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // row 3: 3 -> 2 (counter-clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // row 4: 1 -> 2 (clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // row 5: 0 -> 3 (counter-clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // row 6: 2 -> 3 (clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // row 7: 1 -> 0 (counter-clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
];

static I_DEFINITION: PieceDefinition = PieceDefinition {
    kind: ShapeKind::I,
    cells: [(-1, 1), (0, 1), (1, 1), (2, 1)],
    wall_kicks: &I_WALL_KICKS,
};

static O_DEFINITION: PieceDefinition = PieceDefinition {
    kind: ShapeKind::O,
    cells: [(0, 1), (1, 1), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_WALL_KICKS,
};

static T_DEFINITION: PieceDefinition = PieceDefinition {
    kind: ShapeKind::T,
    cells: [(0, 1), (-1, 0), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_WALL_KICKS,
};

static S_DEFINITION: PieceDefinition = PieceDefinition {
    kind: ShapeKind::S,
    cells: [(0, 1), (1, 1), (-1, 0), (0, 0)],
    wall_kicks: &JLOSTZ_WALL_KICKS,
};

static Z_DEFINITION: PieceDefinition = PieceDefinition {
    kind: ShapeKind::Z,
    cells: [(-1, 1), (0, 1), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_WALL_KICKS,
};

static J_DEFINITION: PieceDefinition = PieceDefinition {
    kind: ShapeKind::J,
    cells: [(-1, 1), (-1, 0), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_WALL_KICKS,
};

static L_DEFINITION: PieceDefinition = PieceDefinition {
    kind: ShapeKind::L,
    cells: [(1, 1), (-1, 0), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_WALL_KICKS,
};
