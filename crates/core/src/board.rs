//! The board capability consumed by the active-piece controller.
//!
//! The controller never owns the occupancy grid. It talks to a [`Board`]
//! passed `&mut` into each operation: footprint clear/stamp, validity
//! checks, and the lock handoff (line clearing plus a spawn request).
//! [`GridBoard`] is a reference implementation backing the tests and
//! benches; real hosts supply their own.

use arrayvec::ArrayVec;

use tetro_control_types::{CellOffset, GridPos};

/// Operations the controller needs from its host's board.
///
/// Within one frame the controller always calls `clear` before any validity
/// check and `set` (directly or through a lock) before yielding, so the grid
/// is consistent at frame boundaries but may transiently lack the active
/// piece mid-update.
pub trait Board {
    /// Remove the piece's cells from the occupancy grid. Idempotent.
    fn clear(&mut self, cells: &[CellOffset; 4], position: GridPos);

    /// Stamp the piece's cells into the occupancy grid.
    fn set(&mut self, cells: &[CellOffset; 4], position: GridPos);

    /// True iff every cell, translated to `position`, is within bounds and
    /// unoccupied.
    fn is_valid_position(&self, cells: &[CellOffset; 4], position: GridPos) -> bool;

    /// Scan and remove fully-occupied rows. Compaction policy is the
    /// board's concern.
    fn clear_lines(&mut self);

    /// Request the next piece. Shape choice, spawn position, and the
    /// board-full game-over condition are the host's concern.
    fn spawn_piece(&mut self);
}

/// Flat-array occupancy grid implementing [`Board`], y-up with row 0 at the
/// bottom. Used by tests and benches; it counts `clear_lines` and
/// `spawn_piece` calls so the lock handoff is observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    width: i32,
    height: i32,
    /// Row-major occupancy, index = y * width + x.
    cells: Vec<bool>,
    clear_lines_calls: u32,
    spawn_requests: u32,
}

impl GridBoard {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
            clear_lines_calls: 0,
            spawn_requests: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Whether the cell at (x, y) is occupied. Out of bounds reads false.
    pub fn occupied(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Mark a single cell occupied. Out of bounds is ignored.
    pub fn fill(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = true;
        }
    }

    /// Fill an entire row except the listed gap columns.
    pub fn fill_row(&mut self, y: i32, gaps: &[i32]) {
        for x in 0..self.width {
            if !gaps.contains(&x) {
                self.fill(x, y);
            }
        }
    }

    fn row_full(&self, y: i32) -> bool {
        (0..self.width).all(|x| self.occupied(x, y))
    }

    /// Remove all full rows, compacting rows above downward. Returns the
    /// cleared row indices, bottom to top.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i32, 4> {
        let mut cleared = ArrayVec::new();
        let width = self.width as usize;
        let mut write_y: usize = 0;

        // Two-pointer compaction from the bottom up.
        for read_y in 0..self.height {
            if self.row_full(read_y) {
                let _ = cleared.try_push(read_y);
            } else {
                if write_y as i32 != read_y {
                    let src = (read_y as usize) * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
                write_y += 1;
            }
        }

        // Empty out the vacated rows at the top.
        for cell in &mut self.cells[write_y * width..] {
            *cell = false;
        }

        cleared
    }

    /// How many times `clear_lines` has been called.
    pub fn clear_lines_calls(&self) -> u32 {
        self.clear_lines_calls
    }

    /// How many spawn requests the controller has issued.
    pub fn spawn_requests(&self) -> u32 {
        self.spawn_requests
    }
}

impl Board for GridBoard {
    fn clear(&mut self, cells: &[CellOffset; 4], position: GridPos) {
        for &(dx, dy) in cells {
            if let Some(i) = self.index(position.0 + dx, position.1 + dy) {
                self.cells[i] = false;
            }
        }
    }

    fn set(&mut self, cells: &[CellOffset; 4], position: GridPos) {
        for &(dx, dy) in cells {
            if let Some(i) = self.index(position.0 + dx, position.1 + dy) {
                self.cells[i] = true;
            }
        }
    }

    fn is_valid_position(&self, cells: &[CellOffset; 4], position: GridPos) -> bool {
        cells.iter().all(|&(dx, dy)| {
            let x = position.0 + dx;
            let y = position.1 + dy;
            match self.index(x, y) {
                Some(i) => !self.cells[i],
                None => false,
            }
        })
    }

    fn clear_lines(&mut self) {
        self.clear_lines_calls += 1;
        let _ = self.clear_full_rows();
    }

    fn spawn_piece(&mut self) {
        self.spawn_requests += 1;
    }
}
