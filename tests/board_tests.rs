use flotilla::{Board, BoardError, Orientation, BOARD_SIZE, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn manual_place_reports_the_failure_kind() {
    let mut board = Board::new();
    board.place(4, Orientation::Horizontal, 0, 0).unwrap();
    assert_eq!(
        board.place(4, Orientation::Horizontal, 7, 0).unwrap_err(),
        BoardError::OutOfBounds
    );
    assert_eq!(
        board.place(3, Orientation::Vertical, 2, 0).unwrap_err(),
        BoardError::Overlap
    );
    assert_eq!(
        board.place(0, Orientation::Horizontal, 0, 0).unwrap_err(),
        BoardError::InvalidLength
    );
}

#[test]
fn init_roster_places_the_standard_fleet() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.init_roster(&mut rng).unwrap();

    assert_eq!(board.ships().len(), NUM_SHIPS);
    let mut lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(lengths, FLEET.to_vec());
    // no overlap: the union covers exactly the fleet's cell count
    assert_eq!(board.occupancy().occupied_cells(), TOTAL_SHIP_CELLS);
    for ship in board.ships() {
        assert!(ship.fits_on_board(BOARD_SIZE));
    }
}

#[test]
fn init_roster_replaces_the_previous_layout() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(7);
    board.init_roster(&mut rng).unwrap();
    board.init_roster(&mut rng).unwrap();
    assert_eq!(board.ships().len(), NUM_SHIPS);
    assert_eq!(board.occupancy().occupied_cells(), TOTAL_SHIP_CELLS);
}

#[test]
fn layout_pairs_ships_with_footprints() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(7);
    board.init_roster(&mut rng).unwrap();

    let layout = board.layout();
    assert_eq!(layout.len(), NUM_SHIPS);
    for (ship, footprint) in &layout {
        assert_eq!(footprint.len(), ship.length());
        for &(x, y) in footprint {
            assert!(board.occupancy().get(x, y).unwrap());
        }
    }
}

#[test]
fn successful_move_commits_the_new_anchor() {
    let mut board = Board::new();
    let id = board.place(4, Orientation::Horizontal, 0, 0).unwrap();

    assert!(board.attempt_move(id, 0, 5).unwrap());
    assert_eq!(board.ship(id).unwrap().anchor(), (0, 5));
    assert!(!board.occupancy().get(0, 0).unwrap());
    assert!(board.occupancy().get(0, 5).unwrap());
    assert!(board.occupancy().get(3, 5).unwrap());
}

#[test]
fn failed_move_rolls_back() {
    let mut board = Board::new();
    let a = board.place(4, Orientation::Horizontal, 0, 0).unwrap();
    board.place(3, Orientation::Horizontal, 0, 2).unwrap();
    let before = *board.occupancy();

    // would cover (0,2)..(3,2) and collide with the second ship
    assert!(!board.attempt_move(a, 0, 2).unwrap());
    assert_eq!(board.ship(a).unwrap().anchor(), (0, 0));
    assert_eq!(*board.occupancy(), before);

    // out-of-bounds target is refused the same way
    assert!(!board.attempt_move(a, 7, 0).unwrap());
    assert_eq!(*board.occupancy(), before);

    assert_eq!(
        board.attempt_move(99, 0, 0).unwrap_err(),
        BoardError::InvalidIndex(99)
    );
}

#[test]
fn rotation_commits_when_there_is_room() {
    let mut board = Board::new();
    let id = board.place(3, Orientation::Horizontal, 0, 0).unwrap();
    assert_eq!(board.attempt_rotate(id).unwrap(), Orientation::Vertical);
    assert!(board.occupancy().get(0, 2).unwrap());
    assert!(!board.occupancy().get(1, 0).unwrap());
}

#[test]
fn rotation_rolls_back_at_the_edge() {
    let mut board = Board::new();
    // vertical footprint would run to y = 12
    let id = board.place(4, Orientation::Horizontal, 6, 9).unwrap();
    let before = *board.occupancy();
    assert_eq!(board.attempt_rotate(id).unwrap(), Orientation::Horizontal);
    assert_eq!(board.ship(id).unwrap().orientation(), Orientation::Horizontal);
    assert_eq!(*board.occupancy(), before);
}

#[test]
fn rotation_can_be_blocked_by_another_ship() {
    let mut board = Board::new();
    let a = board.place(3, Orientation::Horizontal, 0, 0).unwrap();
    // vertical at (0,0) would cover (0,1), which this ship holds
    board.place(2, Orientation::Horizontal, 0, 1).unwrap();
    let before = *board.occupancy();

    assert_eq!(board.attempt_rotate(a).unwrap(), Orientation::Horizontal);
    assert_eq!(*board.occupancy(), before);
}

#[test]
fn is_valid_ignores_the_ships_own_footprint() {
    let mut board = Board::new();
    let id = board.place(2, Orientation::Horizontal, 0, 0).unwrap();
    assert!(board.is_valid(id, 1, 0).unwrap());
    assert!(board.is_valid(id, 0, 0).unwrap());

    board.place(2, Orientation::Horizontal, 4, 0).unwrap();
    assert!(!board.is_valid(id, 3, 0).unwrap());
    assert_eq!(
        board.is_valid(99, 0, 0).unwrap_err(),
        BoardError::InvalidIndex(99)
    );
}

#[test]
fn full_board_reports_board_full() {
    let mut board = Board::new();
    for y in 0..BOARD_SIZE {
        board
            .place(BOARD_SIZE, Orientation::Horizontal, 0, y)
            .unwrap();
    }
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        board.place_ship_randomly(&mut rng, 1).unwrap_err(),
        BoardError::BoardFull { length: 1 }
    );
}

#[test]
fn board_length_ship_is_still_placeable() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(9);
    let id = board.place_ship_randomly(&mut rng, BOARD_SIZE).unwrap();

    let ship = board.ship(id).unwrap();
    let (x, y) = ship.anchor();
    match ship.orientation() {
        Orientation::Horizontal => assert_eq!(x, 0),
        Orientation::Vertical => assert_eq!(y, 0),
    }
    assert_eq!(board.occupancy().occupied_cells(), BOARD_SIZE);

    assert_eq!(
        board.place_ship_randomly(&mut rng, BOARD_SIZE + 1).unwrap_err(),
        BoardError::BoardFull {
            length: BOARD_SIZE + 1
        }
    );
}

#[test]
fn reset_clears_everything() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(3);
    board.init_roster(&mut rng).unwrap();
    board.reset();
    assert!(board.ships().is_empty());
    assert!(board.occupancy().is_empty());
}

#[test]
fn snapshot_renders_the_roster() {
    let mut board = Board::new();
    board.place(2, Orientation::Horizontal, 0, 0).unwrap();
    board.place(1, Orientation::Horizontal, 9, 9).unwrap();

    let snapshot = board.snapshot();
    let lines: Vec<&str> = snapshot.lines().collect();
    assert_eq!(lines.len(), BOARD_SIZE);
    assert_eq!(lines[0], "B B . . . . . . . .");
    assert_eq!(lines[9], ". . . . . . . . . B");
    assert_eq!(snapshot.matches('B').count(), 3);
}
