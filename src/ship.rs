//! Ship geometry and placement queries against a borrowed occupancy grid.
//!
//! A `Ship` owns no board state. Validity checks are pure predicates; the
//! caller decides when to commit cells with `occupy` and when to clear them
//! with `release`, and must keep the two paired so the grid never holds a
//! stale footprint.

use num_traits::{PrimInt, Unsigned};

use crate::grid::Grid;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A single vessel: fixed length, mutable anchor and orientation.
///
/// Horizontal ships cover `(x, y)..(x + length - 1, y)`, vertical ships
/// `(x, y)..(x, y + length - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    x: usize,
    y: usize,
}

impl Ship {
    /// New ship of `length` cells, horizontal, anchored at (0, 0).
    /// `length` must be at least 1.
    pub fn new(length: usize) -> Self {
        debug_assert!(length >= 1, "ships span at least one cell");
        Ship {
            length,
            orientation: Orientation::Horizontal,
            x: 0,
            y: 0,
        }
    }

    /// Ship's length in cells.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Ship's orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor cell (x, y): the origin the footprint is computed from.
    pub fn anchor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Flip between horizontal and vertical. Touches no grid; callers
    /// release the old footprint first and re-occupy afterwards.
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    /// Move the anchor unconditionally. Callers validate before committing.
    pub fn set_position(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    /// Whether the current footprint lies within a square board of the
    /// given side length.
    pub fn fits_on_board(&self, board_size: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.x + self.length <= board_size && self.y < board_size,
            Orientation::Vertical => self.y + self.length <= board_size && self.x < board_size,
        }
    }

    fn cells_at(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
    }

    /// The ship's current footprint, anchor cell first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        self.cells_at(self.x, self.y)
    }

    /// Whether (x, y) is covered by the current footprint.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells().any(|cell| cell == (x, y))
    }

    /// Pure placement check for a *candidate* anchor: true when every cell
    /// the ship would cover is on the grid and currently free.
    pub fn is_valid_at<T, const N: usize>(&self, x: usize, y: usize, grid: &Grid<T, N>) -> bool
    where
        T: PrimInt + Unsigned,
    {
        self.cells_at(x, y)
            .all(|(cx, cy)| matches!(grid.get(cx, cy), Ok(false)))
    }

    /// Mark the current footprint as occupied. Idempotent per cell.
    pub fn occupy<T, const N: usize>(&self, grid: &mut Grid<T, N>)
    where
        T: PrimInt + Unsigned,
    {
        for (x, y) in self.cells() {
            let _ = grid.set(x, y);
        }
    }

    /// Clear the current footprint. Idempotent per cell.
    pub fn release<T, const N: usize>(&self, grid: &mut Grid<T, N>)
    where
        T: PrimInt + Unsigned,
    {
        for (x, y) in self.cells() {
            let _ = grid.clear(x, y);
        }
    }
}
