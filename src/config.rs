/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in the standard fleet.
pub const NUM_SHIPS: usize = 10;

/// Ship lengths placed by `init_roster`, in placement order: one length-4,
/// two length-3, three length-2, four length-1.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Cells covered by a fully placed fleet.
pub const TOTAL_SHIP_CELLS: usize = 20;
