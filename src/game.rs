//! Game session and the turn state machine: attack resolution, the automated
//! side's move chains and win detection.

use crate::ai::TargetingAi;
use crate::board::SideBoard;
use crate::common::{GameError, Outcome};
use crate::config::TOTAL_SHIP_CELLS;
use crate::coord::Coord;
use crate::ship::Ship;
use core::fmt;
use core::str::FromStr;
use log::info;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// The two sides of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Human => "player",
            Side::Automated => "computer",
        }
    }
}

/// Difficulty levels. Each grants the automated side a number of extra
/// attempts after an opening miss on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Master,
    ];

    /// Extra attempts granted after a miss before the turn passes back.
    pub fn extra_attempts(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
            Difficulty::Master => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Master => "master",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Difficulty, GameError> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "master" => Ok(Difficulty::Master),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Observable state of the turn machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    HumanTurn,
    AutomatedTurn,
    Terminal(Side),
}

/// One resolved attack, in resolution order within an
/// [`apply_attack`](Game::apply_attack) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackRecord {
    pub side_attacked: Side,
    pub coord: Coord,
    pub outcome: Outcome,
}

/// A full game session. Constructed fresh or restored from a snapshot,
/// mutated only through [`apply_attack`](Self::apply_attack) and
/// [`resign`](Self::resign), immutable once terminal.
pub struct Game {
    difficulty: Difficulty,
    created_at: u64,
    human: SideBoard,
    automated: SideBoard,
    ai: TargetingAi,
    turn: Side,
    winner: Option<Side>,
}

impl Game {
    pub fn new(
        difficulty: Difficulty,
        human_fleet: Vec<Ship>,
        automated_fleet: Vec<Ship>,
    ) -> Result<Game, GameError> {
        Ok(Game {
            difficulty,
            created_at: unix_now(),
            human: SideBoard::with_fleet(human_fleet)?,
            automated: SideBoard::with_fleet(automated_fleet)?,
            ai: TargetingAi::new(),
            turn: Side::Human,
            winner: None,
        })
    }

    /// Reassemble a session from restored parts. Saves happen between turns,
    /// so play resumes with the human to move.
    pub(crate) fn from_parts(
        difficulty: Difficulty,
        created_at: u64,
        human: SideBoard,
        automated: SideBoard,
        ai: TargetingAi,
    ) -> Game {
        Game {
            difficulty,
            created_at,
            human,
            automated,
            ai,
            turn: Side::Human,
            winner: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Creation time as unix seconds.
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    pub fn board(&self, side: Side) -> &SideBoard {
        match side {
            Side::Human => &self.human,
            Side::Automated => &self.automated,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut SideBoard {
        match side {
            Side::Human => &mut self.human,
            Side::Automated => &mut self.automated,
        }
    }

    pub(crate) fn ai(&self) -> &TargetingAi {
        &self.ai
    }

    pub fn state(&self) -> TurnState {
        match self.winner {
            Some(winner) => TurnState::Terminal(winner),
            None => match self.turn {
                Side::Human => TurnState::HumanTurn,
                Side::Automated => TurnState::AutomatedTurn,
            },
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Resolve an attack on `side_attacked` and run every transition it
    /// triggers, returning all resolved attacks in order.
    ///
    /// An attack on the automated board is the human's turn: hit or miss, it
    /// is their single attack, after which the automated side plays out its
    /// own move sequence. An attack on the human board is an automated-side
    /// move arriving through the public entry point; a hit there lets the
    /// automated side keep firing.
    ///
    /// Terminal sessions accept no further attacks and return no records.
    pub fn apply_attack<R: Rng + ?Sized>(
        &mut self,
        side_attacked: Side,
        coord: Coord,
        rng: &mut R,
    ) -> Result<Vec<AttackRecord>, GameError> {
        if self.winner.is_some() {
            return Ok(Vec::new());
        }
        let mut records = Vec::new();
        let outcome = self.resolve(side_attacked, coord, &mut records)?;
        match side_attacked {
            Side::Automated => {
                if self.winner.is_none() {
                    self.turn = Side::Automated;
                    let budget = self.difficulty.extra_attempts();
                    self.automated_moves(rng, budget, &mut records)?;
                }
            }
            Side::Human => {
                // The automated side is told about its own attacks only.
                // The coordinate may not have come from the pool, so drop
                // it there too before recording the outcome.
                self.ai.seed_from_history(core::slice::from_ref(&coord));
                self.ai.record_result(coord, &outcome);
                if self.winner.is_none() {
                    if outcome.is_miss() {
                        self.turn = Side::Human;
                    } else {
                        self.turn = Side::Automated;
                        self.automated_moves(rng, 0, &mut records)?;
                    }
                }
            }
        }
        Ok(records)
    }

    /// The automated side's move sequence: keep firing while hits land; a
    /// miss consumes one unit of `extra` budget, and with the budget spent
    /// the turn passes back to the human. Any hit ends the budgeted phase,
    /// leaving only chaining.
    fn automated_moves<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        mut extra: usize,
        records: &mut Vec<AttackRecord>,
    ) -> Result<(), GameError> {
        loop {
            let coord = match self.ai.choose_target(rng) {
                Some(coord) => coord,
                None => break,
            };
            let outcome = self.resolve(Side::Human, coord, records)?;
            self.ai.record_result(coord, &outcome);
            if self.winner.is_some() {
                return Ok(());
            }
            if outcome.is_miss() {
                if extra == 0 {
                    break;
                }
                extra -= 1;
            } else {
                extra = 0;
            }
        }
        self.turn = Side::Human;
        Ok(())
    }

    fn resolve(
        &mut self,
        side_attacked: Side,
        coord: Coord,
        records: &mut Vec<AttackRecord>,
    ) -> Result<Outcome, GameError> {
        let outcome = self.board_mut(side_attacked).resolve_attack(coord)?;
        if let Outcome::Sunk(ship) = &outcome {
            info!("{}'s {} is sunk", side_attacked.label(), ship.class());
        }
        records.push(AttackRecord {
            side_attacked,
            coord,
            outcome: outcome.clone(),
        });
        self.update_winner(side_attacked.opponent());
        Ok(outcome)
    }

    /// Evaluate the terminal condition. Returns the cached winner once the
    /// session has ended.
    pub fn check_win(&mut self) -> Option<Side> {
        if self.winner.is_none() {
            self.update_winner(self.turn.opponent());
        }
        self.winner
    }

    fn update_winner(&mut self, attacker: Side) {
        if self.winner.is_some() {
            return;
        }
        let winner = match (self.human.all_sunk(), self.automated.all_sunk()) {
            // Not reachable under alternating attacks; prefer whoever
            // attacked last.
            (true, true) => Some(attacker),
            (true, false) => Some(Side::Automated),
            (false, true) => Some(Side::Human),
            (false, false) => None,
        };
        if let Some(winner) = winner {
            info!("{} wins", winner.label());
            self.winner = Some(winner);
        }
    }

    /// Forfeit on behalf of `side`, making the opponent the winner without
    /// consulting ship counts. No-op once the session is already terminal.
    pub fn resign(&mut self, side: Side) -> Side {
        if let Some(winner) = self.winner {
            return winner;
        }
        let winner = side.opponent();
        info!("{} resigns", side.label());
        self.winner = Some(winner);
        winner
    }

    /// Crude completion measure: the further-along side's hit count as a
    /// percentage of a full fleet, rounded to one decimal.
    pub fn progress_percent(&self) -> f64 {
        let hits = self.human.hits_received().max(self.automated.hits_received());
        let percent = hits as f64 * 100.0 / TOTAL_SHIP_CELLS as f64;
        (percent * 10.0).round() / 10.0
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
