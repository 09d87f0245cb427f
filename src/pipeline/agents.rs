//! Agent implementations (adapters for the [`Agent`] port)

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    engine::{Difficulty, choose_move},
    ports::Agent,
    tictactoe::{Board, Player},
};

/// Engine-backed agent playing at a fixed difficulty
pub struct EngineAgent {
    name: String,
    difficulty: Difficulty,
    rng: StdRng,
}

impl EngineAgent {
    /// Create an engine agent with a random seed
    pub fn new(name: String, difficulty: Difficulty) -> Self {
        Self::with_seed(name, difficulty, random())
    }

    /// Create an engine agent with a deterministic seed
    pub fn with_seed(name: String, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            name,
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Agent for EngineAgent {
    fn select_move(&mut self, board: &Board, me: Player, opponent: Player) -> Result<usize> {
        let mut scratch = *board;
        choose_move(&mut scratch, me, opponent, self.difficulty, &mut self.rng)
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Uniform random baseline
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _me: Player, _opponent: Player) -> Result<usize> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Agent selector used by configuration and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Easy,
    Medium,
    #[value(alias = "impossible")]
    Hard,
    Random,
}

impl AgentKind {
    /// Build a boxed agent of this kind
    pub fn into_boxed_agent(self, name: String) -> Box<dyn Agent> {
        match self {
            AgentKind::Easy => Box::new(EngineAgent::new(name, Difficulty::Easy)),
            AgentKind::Medium => Box::new(EngineAgent::new(name, Difficulty::Medium)),
            AgentKind::Hard => Box::new(EngineAgent::new(name, Difficulty::Hard)),
            AgentKind::Random => Box::new(RandomAgent::new(name)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Easy => "easy",
            AgentKind::Medium => "medium",
            AgentKind::Hard => "hard",
            AgentKind::Random => "random",
        }
    }
}

impl From<Difficulty> for AgentKind {
    fn from(level: Difficulty) -> Self {
        match level {
            Difficulty::Easy => AgentKind::Easy,
            Difficulty::Medium => AgentKind::Medium,
            Difficulty::Hard => AgentKind::Hard,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(AgentKind::Random),
            other => other
                .parse::<Difficulty>()
                .map(AgentKind::from)
                .map_err(|_| crate::Error::ParseDifficulty {
                    input: other.to_string(),
                    expected: "easy, medium, hard, random".to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_picks_empty_cell() {
        let board = Board::from_string("XOXOX....").unwrap();
        let mut agent = RandomAgent::with_seed("r".to_string(), 1);
        for _ in 0..50 {
            let pos = agent.select_move(&board, Player::O, Player::X).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_agents_reject_full_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut random = RandomAgent::with_seed("r".to_string(), 1);
        let mut hard = EngineAgent::with_seed("h".to_string(), Difficulty::Hard, 1);
        assert!(matches!(
            random.select_move(&board, Player::X, Player::O),
            Err(crate::Error::NoValidMoves)
        ));
        assert!(matches!(
            hard.select_move(&board, Player::X, Player::O),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_hard_agent_blocks() {
        let board = Board::from_string("XX..O....").unwrap();
        let mut agent = EngineAgent::with_seed("h".to_string(), Difficulty::Hard, 0);
        assert_eq!(agent.select_move(&board, Player::O, Player::X).unwrap(), 2);
        assert_eq!(agent.name(), "h");
    }

    #[test]
    fn test_seeded_agents_repeat() {
        let board = Board::new();
        let mut a = EngineAgent::with_seed("a".to_string(), Difficulty::Easy, 42);
        let mut b = EngineAgent::with_seed("b".to_string(), Difficulty::Easy, 7);
        b.set_rng_seed(42).unwrap();
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Player::X, Player::O).unwrap(),
                b.select_move(&board, Player::X, Player::O).unwrap()
            );
        }
    }

    #[test]
    fn test_agent_kind_parsing() {
        assert_eq!("random".parse::<AgentKind>().unwrap(), AgentKind::Random);
        assert_eq!("Impossible".parse::<AgentKind>().unwrap(), AgentKind::Hard);
        assert!("nope".parse::<AgentKind>().is_err());
    }
}
