//! Per-side board state: the placed fleet, its remaining segments and the
//! ordered record of attacks received.

use crate::common::{GameError, Outcome};
use crate::config::{FLEET_LENGTHS, TOTAL_SHIP_CELLS};
use crate::coord::Coord;
use crate::ship::{RemainingShip, Ship};

/// Everything one side owns: original ships, their remaining views and the
/// list of coordinates the opposing side has attacked here, in attack order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideBoard {
    ships: Vec<Ship>,
    remaining: Vec<RemainingShip>,
    attacked: Vec<Coord>,
}

impl SideBoard {
    /// Validate and place a full fleet. All-or-nothing: any rejected ship
    /// leaves no board behind.
    pub fn with_fleet(ships: Vec<Ship>) -> Result<SideBoard, GameError> {
        let mut required: Vec<usize> = FLEET_LENGTHS.to_vec();
        for ship in &ships {
            match required.iter().position(|&len| len == ship.len()) {
                Some(i) => {
                    required.swap_remove(i);
                }
                None => return Err(GameError::FleetMismatch),
            }
        }
        if !required.is_empty() {
            return Err(GameError::FleetMismatch);
        }
        let mut seen: Vec<Coord> = Vec::with_capacity(TOTAL_SHIP_CELLS);
        for ship in &ships {
            for &cell in ship.cells() {
                if seen.contains(&cell) {
                    return Err(GameError::OverlappingShips(cell));
                }
                seen.push(cell);
            }
        }
        let remaining = ships.iter().map(RemainingShip::of).collect();
        Ok(SideBoard {
            ships,
            remaining,
            attacked: Vec::new(),
        })
    }

    /// Resolve one attack against this board.
    ///
    /// Re-attacking a coordinate is a caller contract violation: it is
    /// rejected with [`GameError::AlreadyAttacked`] and the board is left
    /// untouched rather than double-counting a segment.
    pub fn resolve_attack(&mut self, coord: Coord) -> Result<Outcome, GameError> {
        if self.attacked.contains(&coord) {
            return Err(GameError::AlreadyAttacked(coord));
        }
        self.attacked.push(coord);
        for (i, remaining) in self.remaining.iter_mut().enumerate() {
            if remaining.strike(coord) {
                let ship = self.ships[i].clone();
                return Ok(if remaining.is_sunk() {
                    Outcome::Sunk(ship)
                } else {
                    Outcome::Hit(ship)
                });
            }
        }
        Ok(Outcome::Miss)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn remaining(&self) -> &[RemainingShip] {
        &self.remaining
    }

    /// Coordinates attacked on this board, in attack order.
    pub fn attacked(&self) -> &[Coord] {
        &self.attacked
    }

    pub fn was_attacked(&self, coord: Coord) -> bool {
        self.attacked.contains(&coord)
    }

    pub fn has_ship_at(&self, coord: Coord) -> bool {
        self.ships.iter().any(|ship| ship.contains(coord))
    }

    /// Total ship segments not yet hit across the fleet.
    pub fn cells_afloat(&self) -> usize {
        self.remaining.iter().map(RemainingShip::afloat).sum()
    }

    pub fn all_sunk(&self) -> bool {
        self.cells_afloat() == 0
    }

    /// Attacks on this board that struck a ship.
    pub fn hits_received(&self) -> usize {
        self.attacked
            .iter()
            .filter(|&&coord| self.has_ship_at(coord))
            .count()
    }
}
