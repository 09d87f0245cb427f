//! Difficulty policy: mixes optimal and random moves

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use log::debug;
use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::select::best_move;
use crate::tictactoe::{Board, Player};

/// How strongly the AI plays
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Mostly random, occasionally optimal
    Easy,
    /// Optimal half of the time
    Medium,
    /// Always optimal
    #[default]
    #[serde(alias = "impossible")]
    #[value(alias = "impossible")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Probability that a move is drawn uniformly from the empty cells
    pub fn random_move_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" | "impossible" => Ok(Difficulty::Hard),
            other => Err(crate::Error::ParseDifficulty {
                input: other.to_string(),
                expected: "easy, medium, hard".to_string(),
            }),
        }
    }
}

/// Source of the randomness the policy needs.
///
/// Every [`rand::Rng`] qualifies, so tests pass a seeded `StdRng`.
pub trait RandomSource {
    /// Uniform draw from `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform choice from `items`; `None` only when `items` is empty
    fn choose_from(&mut self, items: &[usize]) -> Option<usize>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn choose_from(&mut self, items: &[usize]) -> Option<usize> {
        items.choose(self).copied()
    }
}

/// Which branch of the policy produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceSource {
    Optimal,
    Random,
}

/// A policy decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveChoice {
    pub position: usize,
    pub source: ChoiceSource,
}

/// Choose a move for `ai` at the given difficulty, reporting which branch fired.
///
/// Returns `None` on a full board. `Hard` never touches `rng`.
pub fn choose<R: RandomSource + ?Sized>(
    board: &mut Board,
    ai: Player,
    human: Player,
    level: Difficulty,
    rng: &mut R,
) -> Option<MoveChoice> {
    let empty_cells = board.empty_positions();
    if empty_cells.is_empty() {
        return None;
    }

    let p_random = level.random_move_probability();
    if p_random > 0.0 && rng.next_unit() < p_random {
        let position = rng.choose_from(&empty_cells)?;
        debug!("{level} policy for {ai}: random cell {position}");
        return Some(MoveChoice {
            position,
            source: ChoiceSource::Random,
        });
    }

    let position = best_move(board, ai, human)?;
    debug!("{level} policy for {ai}: optimal cell {position}");
    Some(MoveChoice {
        position,
        source: ChoiceSource::Optimal,
    })
}

/// Choose a move for `ai` at the given difficulty; `None` on a full board
pub fn choose_move<R: RandomSource + ?Sized>(
    board: &mut Board,
    ai: Player,
    human: Player,
    level: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    choose(board, ai, human, level, rng).map(|choice| choice.position)
}
