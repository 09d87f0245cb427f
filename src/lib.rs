//! Noughts: an unbeatable Tic-Tac-Toe engine
//!
//! This crate provides:
//! - Board model with outcome detection and winning-line highlighting
//! - Minimax search with alpha-beta pruning and depth-adjusted scoring
//! - Easy/Medium/Hard move policy over an injected random source
//! - Human-versus-engine match sessions with a running scoreboard
//! - Agent series with pluggable observers for progress, metrics and logs

pub mod cli;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod session;
pub mod tictactoe;
pub mod types;

pub use engine::{Difficulty, best_move, choose_move};
pub use error::{Error, Result};
pub use session::{Match, MatchConfig, Phase, Scoreboard};
pub use tictactoe::{Board, Cell, Outcome, Player, detect};
pub use types::Position;
