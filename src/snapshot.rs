//! Serializable session snapshot: enough to reconstruct a game exactly.
//!
//! Ships and attack histories travel in coordinate text form; the AI's
//! unknown pool is not stored, being recomputable by subtracting the
//! attack history from the full board.

use crate::ai::TargetingAi;
use crate::board::SideBoard;
use crate::common::GameError;
use crate::coord::Coord;
use crate::game::{Difficulty, Game, Side};
use crate::ship::Ship;
use serde::{Deserialize, Serialize};

/// Flat persistence record of one session.
///
/// Round-trip contract: restoring and re-capturing yields an equal record,
/// field for field. `date` is carried through unchanged; a persistence
/// collaborator may refresh it before writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub difficulty: String,
    pub date: u64,
    pub human_ships: Vec<Vec<String>>,
    pub human_attacked_against: Vec<String>,
    pub automated_ships: Vec<Vec<String>>,
    pub automated_attacked_against: Vec<String>,
    pub ai_engaged_hits: Vec<String>,
}

impl Snapshot {
    /// Capture the current state of a session.
    pub fn capture(game: &Game) -> Snapshot {
        let human = game.board(Side::Human);
        let automated = game.board(Side::Automated);
        Snapshot {
            difficulty: game.difficulty().as_str().to_string(),
            date: game.created_at(),
            human_ships: ships_to_text(human.ships()),
            human_attacked_against: coords_to_text(human.attacked()),
            automated_ships: ships_to_text(automated.ships()),
            automated_attacked_against: coords_to_text(automated.attacked()),
            ai_engaged_hits: coords_to_text(game.ai().engaged_hits()),
        }
    }

    /// Rebuild a session from this record.
    ///
    /// Boards are reconstructed by replaying the attack histories through
    /// normal resolution, which also regenerates the remaining-segment
    /// views; the AI pool is re-derived from the history on the human board.
    pub fn restore(&self) -> Result<Game, GameError> {
        let difficulty: Difficulty = self.difficulty.parse()?;
        let human = replay_board(&self.human_ships, &self.human_attacked_against)?;
        let automated = replay_board(&self.automated_ships, &self.automated_attacked_against)?;
        let engaged = parse_coords(&self.ai_engaged_hits)?;
        let ai = TargetingAi::restore(human.attacked(), engaged);
        Ok(Game::from_parts(
            difficulty, self.date, human, automated, ai,
        ))
    }
}

fn replay_board(
    ships_text: &[Vec<String>],
    attacked_text: &[String],
) -> Result<SideBoard, GameError> {
    let mut ships = Vec::with_capacity(ships_text.len());
    for cells in ships_text {
        ships.push(Ship::new(parse_coords(cells)?)?);
    }
    let mut board = SideBoard::with_fleet(ships)?;
    for text in attacked_text {
        board.resolve_attack(text.parse()?)?;
    }
    Ok(board)
}

fn parse_coords(texts: &[String]) -> Result<Vec<Coord>, GameError> {
    texts.iter().map(|text| text.parse()).collect()
}

fn coords_to_text(coords: &[Coord]) -> Vec<String> {
    coords.iter().map(Coord::to_string).collect()
}

fn ships_to_text(ships: &[Ship]) -> Vec<Vec<String>> {
    ships.iter().map(|ship| coords_to_text(ship.cells())).collect()
}
