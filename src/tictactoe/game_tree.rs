//! Enumeration of the boards reachable by legal play

use std::collections::HashSet;

use super::board::{Board, Player};

/// A board reached by alternating play, with the side to move next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReachableState {
    pub board: Board,
    pub to_move: Player,
}

/// Collect every distinct board reachable from the empty board when `first`
/// opens, terminal boards included.
///
/// Play stops at the first complete line, so no board with two winners or with
/// moves after a win is produced. The result is deduplicated and sorted by
/// encoding so callers iterate in a stable order.
pub fn reachable_states(first: Player) -> Vec<ReachableState> {
    let mut seen: HashSet<ReachableState> = HashSet::new();
    let mut to_explore = vec![ReachableState {
        board: Board::new(),
        to_move: first,
    }];

    while let Some(state) = to_explore.pop() {
        if !seen.insert(state) {
            continue;
        }
        if state.board.is_terminal() {
            continue;
        }

        for pos in state.board.empty_positions() {
            let mut next = state.board;
            next.set(pos, state.to_move.to_cell());
            to_explore.push(ReachableState {
                board: next,
                to_move: state.to_move.opponent(),
            });
        }
    }

    let mut states: Vec<ReachableState> = seen.into_iter().collect();
    states.sort_by_key(|state| state.board.encode());
    states
}

/// Non-terminal reachable boards: the positions an engine can be asked about
pub fn decision_states(first: Player) -> Vec<ReachableState> {
    reachable_states(first)
        .into_iter()
        .filter(|state| !state.board.is_terminal())
        .collect()
}
