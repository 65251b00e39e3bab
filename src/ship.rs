//! Ships as validated straight runs of coordinates, plus the mutable
//! remaining-segment view used during play.

use crate::common::GameError;
use crate::config::{class_name, FLEET_LENGTHS};
use crate::coord::Coord;
use core::fmt;

/// An immutable placed ship: an ordered, straight, contiguous run of
/// distinct coordinates. Validated once at construction and never mutated;
/// hit tracking lives in [`RemainingShip`].
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
}

impl Ship {
    /// Validate `cells` as a ship of allowed length.
    ///
    /// The run must keep one axis fixed while the other moves by exactly one
    /// cell per step, in either direction.
    pub fn new(cells: Vec<Coord>) -> Result<Ship, GameError> {
        let len = cells.len();
        if !allowed_length(len) {
            return Err(GameError::BadShipLength(len));
        }
        let same_row = cells.iter().all(|c| c.row() == cells[0].row());
        let same_col = cells.iter().all(|c| c.col() == cells[0].col());
        if !same_row && !same_col {
            return Err(GameError::CrookedShip);
        }
        for pair in cells.windows(2) {
            let step = if same_row {
                i16::from(pair[1].col()) - i16::from(pair[0].col())
            } else {
                i16::from(pair[1].row()) - i16::from(pair[0].row())
            };
            if step.abs() != 1 {
                return Err(GameError::CrookedShip);
            }
        }
        // Unit steps plus distinctness leave only monotone runs; a reversal
        // would revisit a cell.
        for (i, cell) in cells.iter().enumerate() {
            if cells[..i].contains(cell) {
                return Err(GameError::CrookedShip);
            }
        }
        Ok(Ship { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Display name derived from the ship's length.
    pub fn class(&self) -> &'static str {
        class_name(self.len())
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.class())?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

fn allowed_length(len: usize) -> bool {
    FLEET_LENGTHS.contains(&len)
}

/// The not-yet-hit segments of one placed ship. Derived from a [`Ship`] at
/// placement time and shrunk as attacks land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingShip {
    cells: Vec<Coord>,
}

impl RemainingShip {
    pub fn of(ship: &Ship) -> RemainingShip {
        RemainingShip {
            cells: ship.cells().to_vec(),
        }
    }

    /// Remove `coord` from the remaining segments. Returns whether the
    /// coordinate belonged to this ship.
    pub fn strike(&mut self, coord: Coord) -> bool {
        match self.cells.iter().position(|&c| c == coord) {
            Some(i) => {
                self.cells.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Count of segments still afloat.
    pub fn afloat(&self) -> usize {
        self.cells.len()
    }

    pub fn is_sunk(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}
