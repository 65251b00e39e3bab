//! Common engine types: attack outcomes and the error taxonomy.

use crate::coord::Coord;
use crate::ship::Ship;
use core::fmt;

/// Result of resolving one attack.
///
/// `Hit` and `Sunk` carry the affected ship so callers can name and paint it
/// without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No ship occupies the attacked coordinate.
    Miss,
    /// A segment was struck; the ship still has segments afloat.
    Hit(Ship),
    /// The attack removed the ship's last remaining segment.
    Sunk(Ship),
}

impl Outcome {
    /// The ship touched by this outcome, if any.
    pub fn ship(&self) -> Option<&Ship> {
        match self {
            Outcome::Miss => None,
            Outcome::Hit(ship) | Outcome::Sunk(ship) => Some(ship),
        }
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Outcome::Miss)
    }
}

/// Errors surfaced by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate text did not parse as `A1`..`J10`.
    MalformedCoord(String),
    /// A ship's cells are not a straight contiguous run of distinct cells.
    CrookedShip,
    /// A ship's length lies outside the allowed range.
    BadShipLength(usize),
    /// The placed lengths do not match the required fleet composition.
    FleetMismatch,
    /// Two ships in a placement share this coordinate.
    OverlappingShips(Coord),
    /// The coordinate was already attacked on this board.
    AlreadyAttacked(Coord),
    /// Random layout generation exceeded its retry cap.
    LayoutExhausted,
    /// A snapshot carried an unrecognised difficulty name.
    UnknownDifficulty(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MalformedCoord(text) => {
                write!(f, "malformed coordinate {:?}, expected A1..J10", text)
            }
            GameError::CrookedShip => {
                write!(f, "ship cells must form a straight contiguous run")
            }
            GameError::BadShipLength(len) => {
                write!(f, "ship length {} is outside the allowed 2..=5", len)
            }
            GameError::FleetMismatch => {
                write!(f, "fleet must contain exactly the lengths 5, 4, 3, 3, 2")
            }
            GameError::OverlappingShips(coord) => {
                write!(f, "two ships overlap at {}", coord)
            }
            GameError::AlreadyAttacked(coord) => {
                write!(f, "{} was already attacked on this board", coord)
            }
            GameError::LayoutExhausted => {
                write!(f, "random layout generation exceeded its retry cap")
            }
            GameError::UnknownDifficulty(name) => {
                write!(f, "unknown difficulty {:?}", name)
            }
        }
    }
}

impl std::error::Error for GameError {}
