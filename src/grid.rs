//! Fixed-size occupancy grids packed into a single unsigned integer.
//!
//! An N×N board fits in `T` as long as `N * N <= T::BITS`. Cells are
//! addressed as `(x, y)` with `x` the column and `y` the row; the bit index
//! is `y * N + x`, so iteration and rendering are row-major, top row first.

use core::any;
use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr};
use num_traits::{PrimInt, Unsigned};
use thiserror::Error;

/// Errors returned by grid operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    /// The grid needs more bits than the backing integer has.
    #[error("{n}x{n} grid does not fit in a {capacity}-bit integer")]
    SizeTooLarge { n: usize, capacity: usize },
    /// Cell coordinate lies outside `[0, N)` on either axis.
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },
}

/// An N×N occupancy grid stored in the unsigned integer `T`.
///
/// `true` cells are covered by some ship; the grid itself knows nothing
/// about which one.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> Grid<T, N>
where
    T: PrimInt + Unsigned,
{
    const CELLS: usize = N * N;

    #[inline]
    fn full_mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create an empty grid (all cells free) without a size check.
    #[inline]
    pub fn new() -> Self {
        Grid { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, GridError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(GridError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true when no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }

    /// Whether cell (x, y) is occupied.
    pub fn get(&self, x: usize, y: usize) -> Result<bool, GridError> {
        self.check_bounds(x, y)?;
        Ok(((self.bits >> (y * N + x)) & T::one()) != T::zero())
    }

    /// Mark cell (x, y) occupied.
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        self.bits = self.bits | (T::one() << (y * N + x));
        Ok(())
    }

    /// Mark cell (x, y) free.
    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        self.bits = self.bits & !(T::one() << (y * N + x));
        Ok(())
    }

    /// Mark every cell occupied.
    #[inline]
    pub fn fill(&mut self) {
        self.bits = Self::full_mask();
    }

    /// Mark every cell free.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    /// Whether any cell is occupied in both grids.
    pub fn intersects(&self, other: &Self) -> bool {
        (self.bits & other.bits) != T::zero()
    }

    /// Build a grid from an iterator over `(x, y)` cells.
    pub fn from_cells<I>(iter: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new();
        for (x, y) in iter {
            grid.set(x, y)?;
        }
        Ok(grid)
    }

    /// Iterator over the occupied cells in row-major order.
    #[inline]
    pub fn iter_occupied(&self) -> Cells<'_, T, N> {
        Cells { grid: self, idx: 0 }
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= N || y >= N {
            Err(GridError::OutOfBounds { x, y })
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> Default for Grid<T, N>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for Grid<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}, {}>:", any::type_name::<T>(), N)?;
        write!(f, "{}", self)
    }
}

/// Diagnostic render: one line per row, top row first, `B` for an occupied
/// cell and `.` for a free one.
impl<T, const N: usize> fmt::Display for Grid<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..N {
                if x > 0 {
                    write!(f, " ")?;
                }
                let occupied = ((self.bits >> (y * N + x)) & T::one()) != T::zero();
                write!(f, "{}", if occupied { 'B' } else { '.' })?;
            }
        }
        Ok(())
    }
}

/// Iterator over the occupied cells of a grid, yielding `(x, y)`.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    grid: &'a Grid<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.grid.bits >> idx) & T::one()) != T::zero() {
                return Some((idx % N, idx / N));
            }
        }
        None
    }
}

/// Intersection of two grids.
impl<T, const N: usize> BitAnd for Grid<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Grid {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Union of two grids.
impl<T, const N: usize> BitOr for Grid<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Grid {
            bits: self.bits | rhs.bits,
        }
    }
}
