use serde::{Deserialize, Serialize};

/// Zero-based grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Inclusive rectangle of grid cells.
///
/// Constructed through [`Bounds::new`] or [`Bounds::spanning`] the rectangle is
/// always normalised, so `start_row <= end_row` and `start_col <= end_col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub start_row: u16,
    pub end_row: u16,
    pub start_col: u16,
    pub end_col: u16,
}

impl Bounds {
    /// Build normalised bounds from two row and two column coordinates in any order.
    pub fn new(row_a: u16, row_b: u16, col_a: u16, col_b: u16) -> Self {
        Self {
            start_row: row_a.min(row_b),
            end_row: row_a.max(row_b),
            start_col: col_a.min(col_b),
            end_col: col_a.max(col_b),
        }
    }

    /// Smallest bounds covering both cells (drag anchor and drag head).
    pub fn spanning(anchor: Cell, current: Cell) -> Self {
        Self::new(anchor.row, current.row, anchor.col, current.col)
    }

    pub fn single(cell: Cell) -> Self {
        Self::spanning(cell, cell)
    }

    pub fn width(&self) -> u16 {
        self.end_col - self.start_col + 1
    }

    pub fn height(&self) -> u16 {
        self.end_row - self.start_row + 1
    }

    pub fn top_left(&self) -> Cell {
        Cell::new(self.start_row, self.start_col)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= self.start_row
            && cell.row <= self.end_row
            && cell.col >= self.start_col
            && cell.col <= self.end_col
    }

    /// Separating-axis test. Rectangles that only share an edge line do not
    /// overlap because bounds are inclusive cell ranges.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        !(self.end_row < other.start_row
            || self.start_row > other.end_row
            || self.end_col < other.start_col
            || self.start_col > other.end_col)
    }

    /// Whether every cell lies inside a `rows` x `cols` grid.
    pub fn fits(&self, rows: u16, cols: u16) -> bool {
        self.end_row < rows && self.end_col < cols
    }
}
