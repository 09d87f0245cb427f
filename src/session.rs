//! Match session: turn order, outcome detection after every placement, and
//! the running scoreboard.
//!
//! A [`Match`] is the explicit application state a front end owns and passes
//! to its event handlers. It drives the per-match state machine:
//!
//! ```text
//! WaitingForHuman --play_human--> WaitingForAi --play_ai--> WaitingForHuman
//!        \                              \
//!         `--(win or draw)--> Terminal <-'
//! ```
//!
//! # Examples
//!
//! ```
//! use noughts::session::{Match, MatchConfig, Phase};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut game = Match::new(MatchConfig::default()).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! game.play_human(4).unwrap();
//! assert_eq!(game.phase(), Phase::WaitingForAi);
//! game.play_ai(&mut rng).unwrap();
//! assert_eq!(game.phase(), Phase::WaitingForHuman);
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    engine::{Difficulty, RandomSource, choose_move},
    tictactoe::{Board, Game, Move, Outcome, Player, WinLine, detect},
};

/// Sides, move order and strength for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub human: Player,
    pub ai: Player,
    /// Side that opens every board
    pub first: Player,
    pub difficulty: Difficulty,
}

impl MatchConfig {
    /// Human plays `human`, the AI takes the other mark. X opens, Hard AI.
    pub fn new(human: Player) -> Self {
        Self {
            human,
            ai: human.opponent(),
            first: Player::X,
            difficulty: Difficulty::default(),
        }
    }

    pub fn with_first(mut self, first: Player) -> Self {
        self.first = first;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.human == self.ai {
            return Err(Error::IdenticalMarks { mark: self.human });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

/// Where the match stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    WaitingForHuman,
    WaitingForAi,
    Terminal(Outcome),
}

/// Results across boards of one match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub human: u32,
    pub ai: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn games(&self) -> u32 {
        self.human + self.ai + self.ties
    }
}

/// What a single placement did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub position: usize,
    pub player: Player,
    pub outcome: Outcome,
    /// Cells to highlight when the move won
    pub win_line: Option<WinLine>,
}

/// A human-versus-AI match
#[derive(Debug, Clone)]
pub struct Match {
    config: MatchConfig,
    board: Board,
    phase: Phase,
    scoreboard: Scoreboard,
    game: Game,
}

impl Match {
    /// Start a match on an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdenticalMarks`] if both sides share a mark.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Self {
            config,
            board: Board::new(),
            phase: Phase::WaitingForHuman,
            scoreboard: Scoreboard::default(),
            game: Game::new(config.first),
        };
        session.phase = session.opening_phase();
        Ok(session)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Moves played on the current board
    pub fn history(&self) -> &Game {
        &self.game
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Change strength; applies from the next AI move
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Place the human's mark.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the board is decided
    /// - [`Error::NotYourTurn`] while the AI is due to move
    /// - [`Error::InvalidPosition`] / [`Error::CellOccupied`] for a bad cell
    pub fn play_human(&mut self, position: usize) -> Result<TurnReport> {
        match self.phase {
            Phase::Terminal(_) => Err(Error::GameOver),
            Phase::WaitingForAi => Err(Error::NotYourTurn {
                player: self.config.human,
            }),
            Phase::WaitingForHuman => self.apply(position, self.config.human),
        }
    }

    /// Let the AI move at the configured difficulty.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the board is decided
    /// - [`Error::NotYourTurn`] while the human is due to move
    pub fn play_ai<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<TurnReport> {
        match self.phase {
            Phase::Terminal(_) => Err(Error::GameOver),
            Phase::WaitingForHuman => Err(Error::NotYourTurn {
                player: self.config.ai,
            }),
            Phase::WaitingForAi => {
                let position = choose_move(
                    &mut self.board,
                    self.config.ai,
                    self.config.human,
                    self.config.difficulty,
                    rng,
                )
                .ok_or(Error::NoValidMoves)?;
                self.apply(position, self.config.ai)
            }
        }
    }

    /// Clear the board and keep the score
    pub fn restart_board(&mut self) {
        self.board.clear();
        self.game = Game::new(self.config.first);
        self.phase = self.opening_phase();
    }

    /// Clear the board and the score
    pub fn reset_match(&mut self) {
        self.scoreboard = Scoreboard::default();
        self.restart_board();
    }

    fn opening_phase(&self) -> Phase {
        if self.config.first == self.config.human {
            Phase::WaitingForHuman
        } else {
            Phase::WaitingForAi
        }
    }

    fn apply(&mut self, position: usize, player: Player) -> Result<TurnReport> {
        self.board.place(position, player)?;
        self.game.moves.push(Move { position, player });

        let detection = detect(&self.board);
        self.game.outcome = detection.outcome;

        self.phase = match detection.outcome {
            Outcome::Ongoing if player == self.config.human => Phase::WaitingForAi,
            Outcome::Ongoing => Phase::WaitingForHuman,
            outcome => {
                self.record(outcome);
                Phase::Terminal(outcome)
            }
        };

        Ok(TurnReport {
            position,
            player,
            outcome: detection.outcome,
            win_line: detection.line,
        })
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(winner) if winner == self.config.human => self.scoreboard.human += 1,
            Outcome::Win(_) => self.scoreboard.ai += 1,
            Outcome::Draw => self.scoreboard.ties += 1,
            Outcome::Ongoing => return,
        }
        info!(
            "board finished with {:?} after {} moves (you {} / ai {} / ties {})",
            outcome,
            self.game.moves.len(),
            self.scoreboard.human,
            self.scoreboard.ai,
            self.scoreboard.ties
        );
    }
}
