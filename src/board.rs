//! The placement engine: owns the occupancy grid and the ship roster and
//! mediates every structural change so the two never diverge.

use log::{debug, warn};
use rand::Rng;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET};
use crate::grid::Grid;
use crate::ship::{Orientation, Ship};

/// Occupancy grid sized for the standard board.
pub type Occupancy = Grid<u128, BOARD_SIZE>;

/// Index of a ship in the roster, in placement order.
pub type ShipId = usize;

/// Rejection-sampling attempts before falling back to an exhaustive scan.
const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Board state for the placement phase: the occupancy grid plus the ordered
/// roster of ships covering it.
///
/// Every mutation goes through the board, which releases, validates and
/// re-occupies footprints so the grid is exactly the union of the roster's
/// cells after each completed operation.
pub struct Board {
    grid: Occupancy,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            grid: Occupancy::new(),
            ships: Vec::new(),
        }
    }

    /// Clear every cell and drop the roster.
    pub fn reset(&mut self) {
        self.grid.clear_all();
        self.ships.clear();
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship with the given id.
    pub fn ship(&self, id: ShipId) -> Result<&Ship, BoardError> {
        self.ships.get(id).ok_or(BoardError::InvalidIndex(id))
    }

    /// Current occupancy grid.
    pub fn occupancy(&self) -> &Occupancy {
        &self.grid
    }

    /// Ordered (ship, footprint) pairs for a rendering layer.
    pub fn layout(&self) -> Vec<(Ship, Vec<(usize, usize)>)> {
        self.ships
            .iter()
            .map(|ship| (*ship, ship.cells().collect()))
            .collect()
    }

    /// Deterministic placement at an explicit anchor and orientation.
    pub fn place(
        &mut self,
        length: usize,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<ShipId, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        let mut ship = Ship::new(length);
        if orientation == Orientation::Vertical {
            ship.rotate();
        }
        ship.set_position(x, y);
        if !ship.fits_on_board(BOARD_SIZE) {
            return Err(BoardError::OutOfBounds);
        }
        if !ship.is_valid_at(x, y, &self.grid) {
            return Err(BoardError::Overlap);
        }
        ship.occupy(&mut self.grid);
        self.ships.push(ship);
        Ok(self.ships.len() - 1)
    }

    /// Place a new ship of `length` at a uniformly random legal anchor.
    ///
    /// Orientation is re-rolled with probability 0.5 on every attempt and the
    /// anchor is sampled over that orientation's valid range. After
    /// `MAX_RANDOM_ATTEMPTS` rejections the search falls back to scanning
    /// every anchor in both orientations, so a board with room always
    /// terminates with a placement and a full board reports `BoardFull`.
    pub fn place_ship_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> Result<ShipId, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        if length > BOARD_SIZE {
            // no anchor range to sample from
            return Err(BoardError::BoardFull { length });
        }

        let mut ship = Ship::new(length);
        for attempt in 1..=MAX_RANDOM_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if ship.orientation() != orientation {
                ship.rotate();
            }
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - length, BOARD_SIZE - 1),
                Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - length),
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            if ship.is_valid_at(x, y, &self.grid) {
                ship.set_position(x, y);
                ship.occupy(&mut self.grid);
                self.ships.push(ship);
                debug!(
                    "placed length-{} ship at ({}, {}) {:?} after {} attempts",
                    length, x, y, orientation, attempt
                );
                return Ok(self.ships.len() - 1);
            }
        }

        warn!(
            "random placement stalled for length {}; scanning every anchor",
            length
        );
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            if ship.orientation() != orientation {
                ship.rotate();
            }
            for y in 0..BOARD_SIZE {
                for x in 0..BOARD_SIZE {
                    if ship.is_valid_at(x, y, &self.grid) {
                        ship.set_position(x, y);
                        ship.occupy(&mut self.grid);
                        self.ships.push(ship);
                        return Ok(self.ships.len() - 1);
                    }
                }
            }
        }
        Err(BoardError::BoardFull { length })
    }

    /// Discard any existing layout and place the standard fleet randomly.
    pub fn init_roster<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.reset();
        for &length in FLEET.iter() {
            self.place_ship_randomly(rng, length)?;
        }
        debug!("roster initialized with {} ships", self.ships.len());
        Ok(())
    }

    /// Whether ship `id` could sit at anchor (x, y) in its current
    /// orientation. The ship's own footprint does not block it, so a UI can
    /// probe drag targets before committing.
    pub fn is_valid(&self, id: ShipId, x: usize, y: usize) -> Result<bool, BoardError> {
        let ship = *self.ship(id)?;
        let mut scratch = self.grid;
        ship.release(&mut scratch);
        Ok(ship.is_valid_at(x, y, &scratch))
    }

    /// Try to move ship `id` to a new anchor. On failure the ship is
    /// restored at its previous anchor and the grid is left exactly as it
    /// was before the attempt.
    pub fn attempt_move(&mut self, id: ShipId, x: usize, y: usize) -> Result<bool, BoardError> {
        let mut ship = *self.ship(id)?;
        ship.release(&mut self.grid);
        if ship.is_valid_at(x, y, &self.grid) {
            ship.set_position(x, y);
            ship.occupy(&mut self.grid);
            self.ships[id] = ship;
            Ok(true)
        } else {
            // roll back to the last known-good anchor
            ship.occupy(&mut self.grid);
            Ok(false)
        }
    }

    /// Try to rotate ship `id` in place, returning the orientation in effect
    /// afterwards. A rotation that would leave the board or collide is
    /// rolled back, same policy as `attempt_move`.
    pub fn attempt_rotate(&mut self, id: ShipId) -> Result<Orientation, BoardError> {
        let mut ship = *self.ship(id)?;
        ship.release(&mut self.grid);
        ship.rotate();
        let (x, y) = ship.anchor();
        if ship.is_valid_at(x, y, &self.grid) {
            ship.occupy(&mut self.grid);
            self.ships[id] = ship;
        } else {
            ship.rotate();
            ship.occupy(&mut self.grid);
        }
        Ok(self.ships[id].orientation())
    }

    /// Rebuild occupancy from the roster and render it, one line per row,
    /// `B` for covered cells and `.` for water. Called when the placement
    /// phase is locked in, and handy for logging.
    pub fn snapshot(&mut self) -> String {
        self.grid.clear_all();
        for ship in &self.ships {
            ship.occupy(&mut self.grid);
        }
        self.grid.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
