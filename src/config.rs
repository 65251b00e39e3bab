//! Fixed game configuration: board size and fleet composition.

/// Side length of the square board. Columns and rows run `1..=BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 10;

/// Number of ships in a legal fleet.
pub const NUM_SHIPS: usize = 5;

/// Required ship lengths, one entry per ship in the fleet.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total occupied cells of a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 17;

/// Display name for a ship of the given length.
pub fn class_name(length: usize) -> &'static str {
    match length {
        2 => "Destroyer",
        3 => "Cruiser",
        4 => "Battleship",
        5 => "Carrier",
        _ => "Unknown",
    }
}
