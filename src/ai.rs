//! Opponent targeting: uniform random hunting until a ship is struck, then
//! directed search that extends the inferred line of engaged hits.

use crate::common::Outcome;
use crate::coord::{Coord, Direction};
use log::debug;
use rand::Rng;

/// Search memory of the automated side.
///
/// `unknown` holds every coordinate this side has never chosen as a target;
/// `engaged` holds confirmed hits on ships that are not yet sunk, in hit
/// order. Every coordinate returned by [`choose_target`](Self::choose_target)
/// is removed from `unknown` first, so a target is never repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetingAi {
    unknown: Vec<Coord>,
    engaged: Vec<Coord>,
}

impl TargetingAi {
    pub fn new() -> TargetingAi {
        TargetingAi {
            unknown: Coord::all().collect(),
            engaged: Vec::new(),
        }
    }

    /// Rebuild memory for a restored session: the historical attack list is
    /// subtracted from the unknown pool and the engaged hits are re-seeded.
    pub fn restore(attacked: &[Coord], engaged: Vec<Coord>) -> TargetingAi {
        let mut ai = TargetingAi::new();
        ai.seed_from_history(attacked);
        ai.engaged = engaged;
        ai
    }

    /// Drop every already-attacked coordinate from the unknown pool so
    /// historical targets are never repeated.
    pub fn seed_from_history(&mut self, attacked: &[Coord]) {
        self.unknown.retain(|coord| !attacked.contains(coord));
    }

    pub fn engaged_hits(&self) -> &[Coord] {
        &self.engaged
    }

    pub fn unknown_len(&self) -> usize {
        self.unknown.len()
    }

    /// Pick the next attack coordinate, shrinking the unknown pool by one.
    ///
    /// Returns `None` only when the pool is empty, which a finished game
    /// reaches first in any legal session.
    pub fn choose_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        if self.engaged.is_empty() {
            return self.hunt(rng);
        }
        if self.engaged.len() >= 2 {
            if let Some(target) = self.extend_line(rng) {
                debug!("target phase: extending engaged line at {}", target);
                self.take(target);
                return Some(target);
            }
        }
        self.around_anchor(rng)
    }

    /// Feed back the outcome of this side's own attack at `coord`.
    pub fn record_result(&mut self, coord: Coord, outcome: &Outcome) {
        match outcome {
            Outcome::Miss => {}
            Outcome::Hit(_) => self.engaged.push(coord),
            Outcome::Sunk(ship) => {
                // The whole ship is resolved; none of its cells can guide
                // the search any further.
                self.engaged.retain(|cell| !ship.contains(*cell));
            }
        }
    }

    /// Hunt phase: uniform random over the pool, preferring squares with at
    /// least one unknown neighbor. A fully enclosed square can never extend
    /// a later hunt, but when only such squares remain one is taken anyway
    /// instead of looping.
    fn hunt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        if self.unknown.is_empty() {
            return None;
        }
        let open: Vec<Coord> = self
            .unknown
            .iter()
            .copied()
            .filter(|coord| {
                coord
                    .neighbors()
                    .iter()
                    .any(|&neighbor| self.is_unknown(neighbor))
            })
            .collect();
        let pick = if open.is_empty() {
            debug!("hunt phase: only enclosed squares remain");
            self.unknown[rng.random_range(0..self.unknown.len())]
        } else {
            open[rng.random_range(0..open.len())]
        };
        self.take(pick);
        Some(pick)
    }

    /// Target phase with a single engaged hit (or a line scan that yielded
    /// nothing): attack a random unknown neighbor of the first engaged
    /// coordinate. With no such neighbor the hit can teach nothing more, so
    /// the engagement is dropped and hunting resumes.
    fn around_anchor<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        let anchor = self.engaged[0];
        let open: Vec<Coord> = anchor
            .neighbors()
            .into_iter()
            .filter(|&neighbor| self.is_unknown(neighbor))
            .collect();
        if open.is_empty() {
            debug!("target phase: {} is spent, resuming hunt", anchor);
            self.engaged.clear();
            return self.hunt(rng);
        }
        let pick = open[rng.random_range(0..open.len())];
        self.take(pick);
        Some(pick)
    }

    /// Target phase with two or more engaged hits: infer the ship's axis
    /// from adjacency and continue the line on the open side.
    fn extend_line<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        for &hit in &self.engaged {
            let linked: Vec<Direction> = Direction::ALL
                .iter()
                .copied()
                .filter(|&dir| {
                    hit.neighbor(dir)
                        .is_some_and(|neighbor| self.engaged.contains(&neighbor))
                })
                .collect();
            match linked.len() {
                0 => {
                    // Disconnected residual hit; poke any unknown side.
                    let open: Vec<Coord> = hit
                        .neighbors()
                        .into_iter()
                        .filter(|&neighbor| self.is_unknown(neighbor))
                        .collect();
                    if !open.is_empty() {
                        return Some(open[rng.random_range(0..open.len())]);
                    }
                }
                1 => {
                    let target = hit.neighbor(linked[0].opposite());
                    if let Some(target) = target.filter(|&t| self.is_unknown(t)) {
                        return Some(target);
                    }
                }
                // Bracketed by engaged hits on both sides; nothing to
                // extend from this cell.
                _ => {}
            }
        }
        None
    }

    fn is_unknown(&self, coord: Coord) -> bool {
        self.unknown.contains(&coord)
    }

    fn take(&mut self, coord: Coord) {
        if let Some(i) = self.unknown.iter().position(|&c| c == coord) {
            self.unknown.swap_remove(i);
        }
    }
}

impl Default for TargetingAi {
    fn default() -> Self {
        TargetingAi::new()
    }
}
