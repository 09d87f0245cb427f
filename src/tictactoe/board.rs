//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A side's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.to_cell()
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "first" | "p1" => Ok(Player::X),
            "o" | "second" | "p2" => Ok(Player::O),
            other => Err(crate::Error::ParsePlayer {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The 3x3 board, cells indexed 0-8 in row-major order.
///
/// `Copy` and only 9 bytes, so concurrent searches simply work on copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl PieceCount {
    /// Pieces placed by the given side
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; CELL_COUNT])
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Parse a board from text.
    ///
    /// Whitespace and `/` row separators are ignored. The remaining characters
    /// must be exactly nine of `X`, `O` and `.`/`_`/`-` for empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] unless exactly 9 cells remain,
    /// or [`crate::Error::InvalidCellCharacter`] for any other character.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count pieces on the board
    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.count_pieces().empty
    }

    /// Place a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for an index past 8 and
    /// [`crate::Error::CellOccupied`] when the cell already holds a mark.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= CELL_COUNT {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::CellOccupied { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Place a mark and return the new board, leaving `self` untouched
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        let mut next = *self;
        next.place(pos, player)?;
        Ok(next)
    }

    /// Unchecked write used by the search's place/undo traversal
    pub(crate) fn set(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Infer whose turn it is from the piece counts, given who opened.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] when the counts cannot come
    /// from alternating play started by `first`.
    pub fn side_to_move(&self, first: Player) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        let opener = count.of(first);
        let second = count.of(first.opponent());
        if opener == second {
            Ok(first)
        } else if opener == second + 1 {
            Ok(first.opponent())
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the mark owning the first complete line, if any
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winning_line(&self.cells).map(|(player, _)| player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Compact nine-character encoding, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = crate::Error;

    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let fixed: [Cell; CELL_COUNT] =
            cells
                .try_into()
                .map_err(|_| crate::Error::InvalidBoardLength {
                    expected: CELL_COUNT,
                    got: cells.len(),
                    context: "cell slice".to_string(),
                })?;
        Ok(Board::from_cells(fixed))
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.get(i), Cell::Empty);
        }
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(board.get(4), Cell::X);

        let err = board.place(4, Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));

        let err = board.place(9, Player::O).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPosition { position: 9 }));
    }

    #[test]
    fn test_with_move_leaves_original() {
        let board = Board::new();
        let next = board.with_move(0, Player::O).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(0), Cell::O);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(1), Cell::O);
        assert_eq!(board.get(2), Cell::X);

        let rows = Board::from_string("XO_/___/__o").unwrap();
        assert_eq!(rows.get(8), Cell::O);
        assert_eq!(rows.occupied_count(), 3);
    }

    #[test]
    fn test_from_string_rejects_wrong_length() {
        let short = Board::from_string("XO").unwrap_err();
        assert!(matches!(
            short,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 2,
                ..
            }
        ));

        assert!(Board::from_string("..........").is_err());
    }

    #[test]
    fn test_from_string_rejects_bad_character() {
        let err = Board::from_string("XOZ......").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_try_from_slice() {
        let cells = vec![Cell::Empty; 9];
        assert_eq!(Board::try_from(cells.as_slice()).unwrap(), Board::new());

        let too_long = vec![Cell::Empty; 10];
        assert!(Board::try_from(too_long.as_slice()).is_err());
    }

    #[test]
    fn test_side_to_move() {
        let board = Board::from_string("X........").unwrap();
        assert_eq!(board.side_to_move(Player::X).unwrap(), Player::O);
        assert!(board.side_to_move(Player::O).is_err());

        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.side_to_move(Player::X).unwrap(), Player::X);
        assert_eq!(board.side_to_move(Player::O).unwrap(), Player::O);

        let lopsided = Board::from_string("XXX......").unwrap();
        assert!(lopsided.side_to_move(Player::X).is_err());
    }

    #[test]
    fn test_terminal_and_winner() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));

        let draw = Board::from_string("XOXXOOOXX").unwrap();
        assert!(draw.is_terminal());
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_encode_and_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(board.encode(), "XOX.O.X..");
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..");
    }

    #[test]
    fn test_player_parsing() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" O ".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
        assert_eq!(Player::X.opponent(), Player::O);
    }
}
