//! Best-move selection

use log::debug;
use serde::{Deserialize, Serialize};

use super::search::{Pruning, SCORE_INFINITY, Search, Sides};
use crate::tictactoe::{Board, CELL_COUNT, Cell, Player};

/// A candidate cell and the score the AI gets by playing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: i32,
}

/// Score every empty cell for `ai`, in ascending index order.
///
/// Each candidate is placed, searched with the opponent to move from depth 1
/// under a full window, then undone.
pub fn evaluate_moves_with(
    search: &mut Search,
    board: &mut Board,
    ai: Player,
    human: Player,
) -> Vec<MoveScore> {
    let sides = Sides::new(ai, human);
    let mut scores = Vec::with_capacity(CELL_COUNT);

    for position in 0..CELL_COUNT {
        if !board.is_empty(position) {
            continue;
        }

        board.set(position, ai.to_cell());
        let score = search.score(board, 1, false, -SCORE_INFINITY, SCORE_INFINITY, sides);
        board.set(position, Cell::Empty);

        scores.push(MoveScore { position, score });
    }

    scores
}

/// [`evaluate_moves_with`] using a fresh alpha-beta search
pub fn evaluate_moves(board: &mut Board, ai: Player, human: Player) -> Vec<MoveScore> {
    evaluate_moves_with(&mut Search::new(Pruning::AlphaBeta), board, ai, human)
}

/// Pick the highest-scoring candidate; the lowest index wins ties
pub fn pick_best(scores: &[MoveScore]) -> Option<MoveScore> {
    let mut best: Option<MoveScore> = None;
    for &candidate in scores {
        if best.is_none_or(|current| candidate.score > current.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Optimal move for `ai` against best play by `human`, using `search`.
///
/// Returns `None` when the board has no empty cell.
pub fn best_move_with(
    search: &mut Search,
    board: &mut Board,
    ai: Player,
    human: Player,
) -> Option<usize> {
    let scores = evaluate_moves_with(search, board, ai, human);
    let best = pick_best(&scores)?;
    debug!(
        "best move for {ai} is {} (score {}, {} nodes, {:?})",
        best.position,
        best.score,
        search.nodes_visited(),
        search.pruning()
    );
    Some(best.position)
}

/// Optimal move for `ai` against best play by `human`.
///
/// Returns `None` when the board has no empty cell. The board is restored
/// before returning.
pub fn best_move(board: &mut Board, ai: Player, human: Player) -> Option<usize> {
    best_move_with(&mut Search::new(Pruning::AlphaBeta), board, ai, human)
}
