//! Winning line analysis for square boards of any size

use super::{Board, Symbol};

/// Utility for analyzing winning runs on a board.
///
/// Rows and columns are scanned with a run counter, so a run shorter than the
/// side (four in a row on a 5x5 board) is found anywhere along the line.
/// Diagonals are checked window by window from every offset where a full run
/// still fits.
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if `symbol` has `win_length` consecutive cells in any direction
    pub fn has_won(board: &Board, symbol: Symbol) -> bool {
        Self::row_run(board, symbol)
            || Self::column_run(board, symbol)
            || Self::diagonal_run(board, symbol)
            || Self::anti_diagonal_run(board, symbol)
    }

    fn row_run(board: &Board, symbol: Symbol) -> bool {
        let n = board.size();
        (0..n).any(|row| Self::scan(board, symbol, (0..n).map(|col| (row, col))))
    }

    fn column_run(board: &Board, symbol: Symbol) -> bool {
        let n = board.size();
        (0..n).any(|col| Self::scan(board, symbol, (0..n).map(|row| (row, col))))
    }

    // Run counter over one line; resets on any non-matching cell.
    fn scan(board: &Board, symbol: Symbol, line: impl Iterator<Item = (usize, usize)>) -> bool {
        let target = symbol.to_cell();
        let mut count = 0;
        for (row, col) in line {
            count = if board.get(row, col) == target {
                count + 1
            } else {
                0
            };
            if count >= board.win_length() {
                return true;
            }
        }
        false
    }

    fn diagonal_run(board: &Board, symbol: Symbol) -> bool {
        let n = board.size();
        let k = board.win_length();
        let target = symbol.to_cell();
        for row in 0..=n - k {
            for col in 0..=n - k {
                if (0..k).all(|i| board.get(row + i, col + i) == target) {
                    return true;
                }
            }
        }
        false
    }

    fn anti_diagonal_run(board: &Board, symbol: Symbol) -> bool {
        let n = board.size();
        let k = board.win_length();
        let target = symbol.to_cell();
        for row in 0..=n - k {
            for col in k - 1..n {
                if (0..k).all(|i| board.get(row + i, col - i) == target) {
                    return true;
                }
            }
        }
        false
    }
}
