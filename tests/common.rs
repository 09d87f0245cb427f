//! Common test utilities for the noughts test suite.
//!
//! Board generators and a reference search shared by the integration tests.

#![allow(dead_code)]

use noughts::{
    engine::{Pruning, Search, Sides},
    tictactoe::{Board, Player},
};
use rand::{Rng, rngs::StdRng};

/// Build a board by random alternating play starting with `first`.
///
/// Stops after `max_plies` moves or just before a move that would end the
/// game, so the result always has at least one empty cell and no winner.
pub fn random_ongoing_board(rng: &mut StdRng, first: Player, max_plies: usize) -> (Board, Player) {
    let mut board = Board::new();
    let mut to_move = first;
    let plies = rng.random_range(0..=max_plies.min(8));

    for _ in 0..plies {
        let empty = board.empty_positions();
        let pos = empty[rng.random_range(0..empty.len())];
        let next = board.with_move(pos, to_move).expect("empty cell");
        if next.is_terminal() {
            break;
        }
        board = next;
        to_move = to_move.opponent();
    }

    (board, to_move)
}

/// Exhaustive minimax value of `board` for `to_move`
pub fn exhaustive_value(board: &mut Board, to_move: Player) -> i32 {
    Search::new(Pruning::Disabled).root_score(board, true, Sides::new(to_move, to_move.opponent()))
}

/// Alpha-beta minimax value of `board` for `to_move`
pub fn pruned_value(board: &mut Board, to_move: Player) -> i32 {
    Search::new(Pruning::AlphaBeta).root_score(board, true, Sides::new(to_move, to_move.opponent()))
}
