//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in detection order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// One of the eight index triples that wins the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.0.contains(&pos)
    }
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First complete line in [`WINNING_LINES`] order, with the mark filling it
    pub fn winning_line(cells: &[Cell; 9]) -> Option<(Player, WinLine)> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let owner = cells[a].to_player()?;
            (cells[a] == cells[b] && cells[b] == cells[c]).then_some((owner, WinLine([a, b, c])))
        })
    }

    /// Every complete line owned by `player`
    pub fn winning_lines_for(cells: &[Cell; 9], player: Player) -> Vec<WinLine> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .map(|&line| WinLine(line))
            .collect()
    }

    /// Positions that would immediately complete a line for the player, ascending
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mut moves = BTreeSet::new();
        for line in &WINNING_LINES {
            if let Some(pos) = Self::winning_move_in_line(cells, player, line) {
                moves.insert(pos);
            }
        }
        moves.into_iter().collect()
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
