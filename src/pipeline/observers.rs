//! Observer implementations for series runs
//!
//! Observers allow composable data collection during a series without coupling
//! the game loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, Game, Outcome, Player},
};

/// One move as written to JSONL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepObservation {
    pub step_num: usize,
    /// Board before the move
    pub board: String,
    pub player: Player,
    pub move_position: usize,
}

/// One finished game as written to JSONL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameObservation {
    pub game_num: usize,
    pub first_player: Player,
    pub outcome: Outcome,
    pub steps: Vec<StepObservation>,
    pub total_moves: usize,
}

/// Progress bar observer
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (X:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        match game.outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Metrics observer - tracks outcome counts and game lengths
pub struct MetricsObserver {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    total_games: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            total_games: 0,
            move_counts: Vec::new(),
        }
    }

    /// Get average game length in plies
    pub fn avg_game_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_games: self.total_games,
            x_wins: self.x_wins,
            o_wins: self.o_wins,
            draws: self.draws,
            avg_game_length: self.avg_game_length(),
            shortest_game: self.move_counts.iter().copied().min(),
            longest_game: self.move_counts.iter().copied().max(),
        }
    }
}

/// Summary of series metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_game_length: f64,
    pub shortest_game: Option<usize>,
    pub longest_game: Option<usize>,
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.move_counts.push(0);
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _player: Player,
        _move_pos: usize,
    ) -> Result<()> {
        if let Some(last) = self.move_counts.last_mut() {
            *last += 1;
        }
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, game: &Game) -> Result<()> {
        self.total_games += 1;
        match game.outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
        Ok(())
    }
}

/// JSONL observer - exports one game per line
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current_game_steps: Vec<StepObservation>,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self {
            writer,
            current_game_steps: Vec::new(),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.current_game_steps.clear();
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        step_num: usize,
        board: &Board,
        player: Player,
        move_pos: usize,
    ) -> Result<()> {
        self.current_game_steps.push(StepObservation {
            step_num,
            board: board.encode(),
            player,
            move_position: move_pos,
        });
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        let observation = GameObservation {
            game_num,
            first_player: game.first_player,
            outcome: game.outcome,
            total_moves: self.current_game_steps.len(),
            steps: std::mem::take(&mut self.current_game_steps),
        };

        serde_json::to_writer(&mut self.writer, &observation)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}
