//! Outcome detection
//!
//! Outcomes are derived from the board on demand and never stored.

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    lines::{LineAnalyzer, WinLine},
};

/// State of a game as read off the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Result of [`detect`]: the outcome plus the line to highlight on a win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub outcome: Outcome,
    pub line: Option<WinLine>,
}

/// Classify a board.
///
/// Lines are checked in [`super::WINNING_LINES`] order and the first complete
/// one decides the winner. A full board without a line is a draw.
pub fn detect(board: &Board) -> Detection {
    if let Some((winner, line)) = LineAnalyzer::winning_line(board.cells()) {
        return Detection {
            outcome: Outcome::Win(winner),
            line: Some(line),
        };
    }

    let outcome = if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    };
    Detection {
        outcome,
        line: None,
    }
}
