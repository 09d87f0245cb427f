//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Cell, WinLine};

/// Create a spinner for long-running checks
pub fn create_spinner(message: &str) -> crate::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board as a 3x3 grid.
///
/// Empty cells show their index so a player can see which digit to type.
/// Cells on `highlight` are wrapped in brackets.
pub fn render_board(board: &Board, highlight: Option<WinLine>) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                let symbol = match board.get(pos) {
                    Cell::Empty => char::from(b'0' + pos as u8),
                    cell => cell.to_char(),
                };
                if highlight.is_some_and(|line| line.contains(pos)) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(549_946), "549,946");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_render_board_shows_indices_for_empty_cells() {
        let board = Board::from_string("X...O....").unwrap();
        let rendered = render_board(&board, None);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " X | 1 | 2 ");
        assert_eq!(lines[1], "---+---+---");
        assert_eq!(lines[2], " 3 | O | 5 ");
        assert_eq!(lines[4], " 6 | 7 | 8 ");
    }

    #[test]
    fn test_render_board_highlights_line() {
        let board = Board::from_string("XXXOO....").unwrap();
        let rendered = render_board(&board, crate::tictactoe::detect(&board).line);
        assert!(rendered.starts_with("[X]|[X]|[X]"));
    }
}
