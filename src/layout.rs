//! Random fleet layout generation.

use crate::common::GameError;
use crate::config::FLEET_LENGTHS;
use crate::coord::{Coord, Direction};
use crate::ship::Ship;
use rand::Rng;

/// Upper bound on placement attempts before giving up. A full fleet covers
/// 17 of 100 cells, so in practice the cap is never approached; exceeding it
/// means something is misconfigured.
const MAX_ATTEMPTS: usize = 10_000;

/// Produce a non-overlapping random placement of the required fleet.
///
/// Each attempt draws a uniform origin, axis and pending length, builds the
/// candidate run and discards it on any off-board or occupied cell.
pub fn generate_layout<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<Ship>, GameError> {
    let board: Vec<Coord> = Coord::all().collect();
    let mut pending: Vec<usize> = FLEET_LENGTHS.to_vec();
    let mut ships: Vec<Ship> = Vec::with_capacity(pending.len());
    let mut occupied: Vec<Coord> = Vec::new();

    let mut attempts = 0;
    while !pending.is_empty() {
        attempts += 1;
        if attempts > MAX_ATTEMPTS {
            return Err(GameError::LayoutExhausted);
        }
        let origin = board[rng.random_range(0..board.len())];
        let dir = if rng.random() {
            Direction::Right
        } else {
            Direction::Down
        };
        let pick = rng.random_range(0..pending.len());
        let cells = match origin.line(dir, pending[pick]) {
            Some(cells) => cells,
            None => continue,
        };
        if cells.iter().any(|cell| occupied.contains(cell)) {
            continue;
        }
        occupied.extend_from_slice(&cells);
        ships.push(Ship::new(cells)?);
        pending.swap_remove(pick);
    }
    Ok(ships)
}
