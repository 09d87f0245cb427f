//! Game search engine
//!
//! Pure functions over a borrowed [`Board`](crate::tictactoe::Board):
//! - [`search`]: minimax with alpha-beta pruning and its unpruned reference
//! - [`select`]: optimal move selection with lowest-index tie-break
//! - [`difficulty`]: the Easy/Medium/Hard policy over an injected random source
//!
//! Every call borrows the board mutably, explores it in place and restores it
//! before returning. Nothing is cached between calls.

pub mod difficulty;
pub mod search;
pub mod select;

pub use difficulty::{
    ChoiceSource, Difficulty, MoveChoice, RandomSource, choose, choose_move,
};
pub use search::{Pruning, SCORE_INFINITY, Search, Sides, WIN_SCORE, score, terminal_score};
pub use select::{
    MoveScore, best_move, best_move_with, evaluate_moves, evaluate_moves_with, pick_best,
};
