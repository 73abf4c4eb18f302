/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Ship lengths placed on every board, largest first.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of ships per side; sinking this many ends the match.
pub const WIN_THRESHOLD: usize = FLEET.len();

/// Placement attempts allowed for one board before it is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i];
        i += 1;
    }
    total
}
