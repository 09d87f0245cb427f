//! Series pipeline: many games between two agents

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Agent, Observer},
    tictactoe::{Game, Outcome, Player},
};

/// Series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of games
    pub num_games: usize,

    /// Random seed; X's agent gets `seed`, O's agent `seed + 1`
    pub seed: Option<u64>,

    /// Which player opens every game
    pub first_player: Player,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: None,
            first_player: Player::X,
        }
    }
}

/// Result of a series, counted per mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// Total games played
    pub total_games: usize,

    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,

    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
}

impl SeriesResult {
    /// Create a new series result
    pub fn new(total_games: usize, x_wins: usize, o_wins: usize, draws: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Wins for the given mark
    pub fn wins_for(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a fixed number of games between an X agent and an O agent
pub struct Series {
    config: SeriesConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl Series {
    /// Create a new series
    pub fn new(config: SeriesConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the series
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run every game and aggregate the outcomes
    pub fn run(&mut self, x_agent: &mut dyn Agent, o_agent: &mut dyn Agent) -> Result<SeriesResult> {
        if let Some(seed) = self.config.seed {
            x_agent.set_rng_seed(seed)?;
            o_agent.set_rng_seed(seed.wrapping_add(1))?;
        }

        let mut x_wins = 0;
        let mut o_wins = 0;
        let mut draws = 0;

        for observer in &mut self.observers {
            observer.on_series_start(self.config.num_games)?;
        }

        for game_num in 0..self.config.num_games {
            let game = self.play_game(game_num, x_agent, o_agent)?;

            match game.outcome {
                Outcome::Win(Player::X) => x_wins += 1,
                Outcome::Win(Player::O) => o_wins += 1,
                Outcome::Draw => draws += 1,
                Outcome::Ongoing => unreachable!("play_game only returns finished games"),
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, &game)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_series_end()?;
        }

        let result = SeriesResult::new(self.config.num_games, x_wins, o_wins, draws);
        info!(
            "{} (X) vs {} (O): {} games, X {} / O {} / draws {}",
            x_agent.name(),
            o_agent.name(),
            result.total_games,
            result.x_wins,
            result.o_wins,
            result.draws
        );
        Ok(result)
    }

    fn play_game(
        &mut self,
        game_num: usize,
        x_agent: &mut dyn Agent,
        o_agent: &mut dyn Agent,
    ) -> Result<Game> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut game = Game::new(self.config.first_player);
        let mut board = game.initial;
        let mut step_num = 0;

        while !game.outcome.is_terminal() {
            let player = game.to_move();
            let agent: &mut dyn Agent = match player {
                Player::X => &mut *x_agent,
                Player::O => &mut *o_agent,
            };

            let move_pos = agent.select_move(&board, player, player.opponent())?;
            if move_pos >= board.cells().len() || !board.is_empty(move_pos) {
                return Err(Error::InvalidConfiguration {
                    message: format!(
                        "agent '{}' chose illegal cell {move_pos} on {}",
                        agent.name(),
                        board.encode()
                    ),
                });
            }

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, &board, player, move_pos)?;
            }

            game.play(move_pos)?;
            board.place(move_pos, player)?;
            step_num += 1;
        }

        Ok(game)
    }
}
