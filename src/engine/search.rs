//! Minimax search with alpha-beta pruning
//!
//! The board is explored destructively: each candidate mark is written, the
//! subtree is searched, and the cell is emptied again before the next
//! candidate. A search call always hands the board back exactly as it got it.

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, CELL_COUNT, Cell, Outcome, Player, detect};

/// Stand-in for an unbounded score; negated for the lower bound.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// Score of an immediate win; each ply of delay costs one point.
pub const WIN_SCORE: i32 = 10;

/// Whether the search may cut off branches the opponent would never allow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pruning {
    #[default]
    AlphaBeta,
    /// Plain exhaustive minimax, kept as the reference the pruned search must match
    Disabled,
}

/// The two marks a search is played between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sides {
    /// Mark whose wins score positive
    pub searching: Player,
    pub other: Player,
}

impl Sides {
    pub fn new(searching: Player, other: Player) -> Self {
        Self { searching, other }
    }
}

/// Score a finished board from the searching side's point of view.
///
/// Wins are worth `10 - depth` and losses `depth - 10`, so faster wins and
/// slower losses are preferred. Returns `None` while the game is ongoing.
pub fn terminal_score(board: &Board, depth: i32, sides: Sides) -> Option<i32> {
    match detect(board).outcome {
        Outcome::Win(winner) if winner == sides.searching => Some(WIN_SCORE - depth),
        Outcome::Win(_) => Some(depth - WIN_SCORE),
        Outcome::Draw => Some(0),
        Outcome::Ongoing => None,
    }
}

/// A minimax searcher that counts the nodes it visits
#[derive(Debug, Clone, Default)]
pub struct Search {
    pruning: Pruning,
    nodes_visited: u64,
}

impl Search {
    pub fn new(pruning: Pruning) -> Self {
        Self {
            pruning,
            nodes_visited: 0,
        }
    }

    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Nodes scored since construction or the last [`Search::reset_stats`]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    pub fn reset_stats(&mut self) {
        self.nodes_visited = 0;
    }

    /// Minimax value of `board` for `sides.searching`.
    ///
    /// `depth` counts plies already played in this branch and `maximizing`
    /// says whether `sides.searching` moves next. Empty cells are tried in
    /// ascending index order. With [`Pruning::AlphaBeta`] the scan of a node
    /// stops as soon as `beta <= alpha`; a root call with the full
    /// `(-SCORE_INFINITY, SCORE_INFINITY)` window returns the same value as the
    /// unpruned search.
    pub fn score(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        sides: Sides,
    ) -> i32 {
        self.nodes_visited += 1;

        if let Some(score) = terminal_score(board, depth, sides) {
            return score;
        }

        let (mark, mut best) = if maximizing {
            (sides.searching, -SCORE_INFINITY)
        } else {
            (sides.other, SCORE_INFINITY)
        };

        for pos in 0..CELL_COUNT {
            if !board.is_empty(pos) {
                continue;
            }

            board.set(pos, mark.to_cell());
            let value = self.score(board, depth + 1, !maximizing, alpha, beta, sides);
            board.set(pos, Cell::Empty);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                break;
            }
        }

        best
    }

    /// Full-window search from the root of a fresh query
    pub fn root_score(&mut self, board: &mut Board, maximizing: bool, sides: Sides) -> i32 {
        self.score(board, 0, maximizing, -SCORE_INFINITY, SCORE_INFINITY, sides)
    }
}

/// Alpha-beta minimax value of `board` for `searching`.
///
/// The board is restored before returning.
pub fn score(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    alpha: i32,
    beta: i32,
    searching: Player,
    other: Player,
) -> i32 {
    Search::new(Pruning::AlphaBeta).score(
        board,
        depth,
        maximizing,
        alpha,
        beta,
        Sides::new(searching, other),
    )
}
