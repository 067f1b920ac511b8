//! Common types: engine errors shared across the crate.

use thiserror::Error;

use crate::board::ShipId;
use crate::grid::GridError;

/// Errors returned by [`Board`](crate::Board) operations.
///
/// Ship-level validity stays a plain `bool`; these cover the engine-level
/// outcomes a caller must handle explicitly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A requested placement extends past the board edge.
    #[error("placement extends past the board edge")]
    OutOfBounds,
    /// A requested placement intersects an already occupied cell.
    #[error("placement overlaps an already placed ship")]
    Overlap,
    /// Random placement found no legal anchor in either orientation.
    #[error("no legal anchor remains for a ship of length {length}")]
    BoardFull { length: usize },
    /// Ship id does not name a ship in the roster.
    #[error("ship index {0} is out of range")]
    InvalidIndex(ShipId),
    /// Ships span at least one cell.
    #[error("ship length must be at least 1")]
    InvalidLength,
    /// Underlying grid error (e.g. invalid size or cell index).
    #[error(transparent)]
    Grid(#[from] GridError),
}
