//! Grid occupancy and ship-placement engine for the Battleship setup phase.
//!
//! A [`Board`] owns a 10×10 occupancy grid and an ordered roster of [`Ship`]s.
//! It generates a collision-free random layout for the standard fleet and
//! mediates moves and rotations so the grid always matches the union of the
//! ships' footprints. There is no opponent and no firing phase; the scope
//! ends where the placement phase locks in.

mod board;
mod common;
mod config;
mod grid;
mod logging;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use grid::*;
pub use logging::init_logging;
pub use ship::*;
