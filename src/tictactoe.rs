//! Tic-Tac-Toe board model

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod outcome;
pub mod validation;

pub use board::{Board, CELL_COUNT, Cell, PieceCount, Player};
pub use game::{Game, Move};
pub use game_tree::{ReachableState, decision_states, reachable_states};
pub use lines::{LineAnalyzer, WINNING_LINES, WinLine};
pub use outcome::{Detection, Outcome, detect};
