//! Alpha-beta pruning never changes a score or a chosen move

use noughts::{
    engine::{Pruning, Search, best_move_with, evaluate_moves_with},
    tictactoe::{Player, decision_states},
};
use rand::{SeedableRng, rngs::StdRng};

mod common;

#[test]
fn every_reachable_board_scores_the_same() {
    for first in [Player::X, Player::O] {
        for state in decision_states(first) {
            let mut board = state.board;
            let pruned = common::pruned_value(&mut board, state.to_move);
            let exhaustive = common::exhaustive_value(&mut board, state.to_move);
            assert_eq!(
                pruned,
                exhaustive,
                "root value differs on {} ({} to move)",
                board.encode(),
                state.to_move
            );
            assert_eq!(board, state.board, "search must restore the board");
        }
    }
}

#[test]
fn random_boards_get_identical_move_tables() {
    let mut rng = StdRng::seed_from_u64(20_240_601);
    let mut pruned = Search::new(Pruning::AlphaBeta);
    let mut exhaustive = Search::new(Pruning::Disabled);

    for _ in 0..150 {
        let (mut board, to_move) = common::random_ongoing_board(&mut rng, Player::X, 7);
        let human = to_move.opponent();

        let fast = evaluate_moves_with(&mut pruned, &mut board, to_move, human);
        let slow = evaluate_moves_with(&mut exhaustive, &mut board, to_move, human);
        assert_eq!(fast, slow, "move tables differ on {}", board.encode());

        assert_eq!(
            best_move_with(&mut pruned, &mut board, to_move, human),
            best_move_with(&mut exhaustive, &mut board, to_move, human),
        );
    }

    assert!(pruned.nodes_visited() < exhaustive.nodes_visited());
}

#[test]
fn exhaustive_search_of_the_empty_board_visits_the_whole_tree() {
    let mut board = noughts::Board::new();
    let mut search = Search::new(Pruning::Disabled);
    let value = search.root_score(
        &mut board,
        true,
        noughts::engine::Sides::new(Player::X, Player::O),
    );

    assert_eq!(value, 0);
    assert_eq!(search.nodes_visited(), 549_946);

    let mut pruned = Search::new(Pruning::AlphaBeta);
    pruned.root_score(
        &mut board,
        true,
        noughts::engine::Sides::new(Player::X, Player::O),
    );
    assert!(pruned.nodes_visited() * 10 < search.nodes_visited());
}
