//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    outcome::{Outcome, detect},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// A complete game with history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub first_player: Player,
    pub moves: Vec<Move>,
    pub outcome: Outcome,
}

impl Game {
    /// Create a new game on an empty board
    pub fn new(first_player: Player) -> Self {
        Game {
            initial: Board::new(),
            first_player,
            moves: Vec::new(),
            outcome: Outcome::Ongoing,
        }
    }

    /// Side whose turn it is, by alternation from the first player
    pub fn to_move(&self) -> Player {
        if self.moves.len().is_multiple_of(2) {
            self.first_player
        } else {
            self.first_player.opponent()
        }
    }

    /// Play a move for the side to move
    pub fn play(&mut self, position: usize) -> Result<Outcome, crate::Error> {
        if self.outcome.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move();
        let mut board = self.current_board()?;
        board.place(position, player)?;

        self.moves.push(Move { position, player });
        self.outcome = detect(&board).outcome;
        Ok(self.outcome)
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board it is
    /// applied to. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = self.initial;
        for m in self.moves.iter().take(end_index) {
            board.place(m.position, m.player)?;
        }
        Ok(board)
    }

    /// Get current board
    pub fn current_board(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of boards, starting with the initial one
    pub fn board_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        boards.push(self.initial);

        for i in 1..=self.moves.len() {
            boards.push(self.replay_moves_until(i)?);
        }

        Ok(boards)
    }

    /// Move positions in play order
    pub fn positions(&self) -> Vec<usize> {
        self.moves.iter().map(|m| m.position).collect()
    }
}
