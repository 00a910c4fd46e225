//! Output formatting for CLI

use crate::{controller::Outcome, tictactoe::Board};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with 1-based row and column labels.
///
/// ```text
///     1 2 3
///  1  X . .
///  2  . O .
///  3  . . .
/// ```
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let mut out = String::from("    ");
    let header: Vec<String> = (1..=n).map(|c| c.to_string()).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    for row in 0..n {
        let cells: Vec<String> = (0..n)
            .map(|col| board.get(row, col).to_char().to_string())
            .collect();
        out.push_str(&format!("{:>2}  {}\n", row + 1, cells.join(" ")));
    }
    out
}

/// Human-readable match result
pub fn describe_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Ongoing => "game in progress",
        Outcome::HumanWin => "You win!",
        Outcome::AiWin => "The AI wins.",
        Outcome::Draw => "It's a draw.",
    }
}

/// Format a 0..=1 ratio as a percentage
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_labels() {
        let board = Board::from_rows(&["X..", ".O.", "..."], 3).unwrap();
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "    1 2 3");
        assert_eq!(lines[1], " 1  X . .");
        assert_eq!(lines[2], " 2  . O .");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
