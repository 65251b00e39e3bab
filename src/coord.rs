//! Board coordinates and the alphanumeric text form used at the UI boundary.

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use core::fmt;
use core::str::FromStr;

/// One of the four side directions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The direction pointing the opposite way along the same axis.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// A board cell as a `(col, row)` pair, both in `1..=BOARD_SIZE`.
///
/// The text form concatenates the column letter `A`..`J` with the row number
/// `1`..`10`; [`Display`](fmt::Display) and [`FromStr`] are exact inverses
/// over valid values. Out-of-range pairs cannot be constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    col: u8,
    row: u8,
}

impl Coord {
    /// Construct a coordinate, or `None` if either component leaves the board.
    pub fn new(col: u8, row: u8) -> Option<Coord> {
        if (1..=BOARD_SIZE).contains(&col) && (1..=BOARD_SIZE).contains(&row) {
            Some(Coord { col, row })
        } else {
            None
        }
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row(self) -> u8 {
        self.row
    }

    /// Iterate every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Coord { col, row }))
    }

    /// The adjacent cell in `dir`, or `None` at the board edge.
    pub fn neighbor(self, dir: Direction) -> Option<Coord> {
        let (col, row) = match dir {
            Direction::Left => (self.col - 1, self.row),
            Direction::Right => (self.col + 1, self.row),
            Direction::Up => (self.col, self.row - 1),
            Direction::Down => (self.col, self.row + 1),
        };
        Coord::new(col, row)
    }

    /// All existing side neighbors, up to four.
    pub fn neighbors(self) -> Vec<Coord> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.neighbor(dir))
            .collect()
    }

    /// The run of `length` cells starting here and stepping in `dir`, or
    /// `None` if any cell would leave the board.
    pub fn line(self, dir: Direction, length: usize) -> Option<Vec<Coord>> {
        let mut cells = Vec::with_capacity(length);
        let mut cursor = self;
        for i in 0..length {
            if i > 0 {
                cursor = cursor.neighbor(dir)?;
            }
            cells.push(cursor);
        }
        Some(cells)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.col - 1) as char;
        write!(f, "{}{}", letter, self.row)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Coord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Coord, GameError> {
        let malformed = || GameError::MalformedCoord(s.to_string());
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(malformed());
        }
        let col = letter as u8 - b'A' + 1;
        let row: u8 = chars.as_str().parse().map_err(|_| malformed())?;
        Coord::new(col, row).ok_or_else(malformed)
    }
}
