//! Board consistency checks
//!
//! The engine searches any board it is handed. These checks let callers such as
//! the CLI flag boards that alternating play could never produce.

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check the board against Tic-Tac-Toe rules, either opener allowed.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Explain why a board could not arise from alternating play.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidPieceCounts`] if the counts differ by more than one
    /// - [`crate::Error::InvalidConfiguration`] for impossible win patterns
    pub fn validate(&self) -> Result<(), crate::Error> {
        let count = self.count_pieces();
        if count.x.abs_diff(count.o) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Err(crate::Error::InvalidConfiguration {
                message: "both players cannot have winning lines".to_string(),
            });
        }

        for (player, won) in [(Player::X, x_wins), (Player::O, o_wins)] {
            if !won {
                continue;
            }
            // The winner made the last move, so cannot trail in pieces.
            if count.of(player) < count.of(player.opponent()) {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!("{player} has a line but fewer pieces than its opponent"),
                });
            }
            if !self.winning_lines_share_cell(player) {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!("{player} has disjoint winning lines"),
                });
            }
        }

        Ok(())
    }

    /// Check if all winning lines for a player share at least one cell.
    /// Two lines can only be completed together by a single final move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::winning_lines_for(self.cells(), player);
        if lines.len() < 2 {
            return true;
        }

        (0..9).any(|pos| lines.iter().all(|line| line.contains(pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_opening_boards_are_valid() {
        assert!(Board::new().is_valid());
        assert!(Board::from_string("....X....").unwrap().is_valid());
        assert!(Board::from_string("....O....").unwrap().is_valid());
    }

    #[test]
    fn test_lopsided_counts_are_invalid() {
        let board = Board::from_string("XXX.O....").unwrap();
        assert!(matches!(
            board.validate(),
            Err(crate::Error::InvalidPieceCounts { x_count: 3, o_count: 1 })
        ));
    }

    #[test]
    fn test_double_winner_is_invalid() {
        let board = Board::from_string("XXXOOO...").unwrap();
        assert!(!board.is_valid());
    }

    #[test]
    fn test_winner_behind_in_pieces_is_invalid() {
        // O completes a line while X has an extra piece: O cannot have moved last
        let board = Board::from_string("OOOXX.XX.").unwrap();
        assert!(!board.is_valid());
    }

    #[test]
    fn test_shared_cell_double_line_is_valid() {
        // X X X
        // X O O
        // X O O  (X's last move at 0 completes both lines)
        let board = Board::from_string("XXXXOOXOO").unwrap();
        assert!(board.winning_lines_share_cell(Player::X));
        assert!(board.is_valid());
    }

    #[test]
    fn test_disjoint_double_line_is_invalid() {
        let board = Board::from_string("XXXOO.XXX").unwrap();
        assert!(!board.winning_lines_share_cell(Player::X));
        assert!(!board.is_valid());
    }
}
