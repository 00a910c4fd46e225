//! Shared helpers for the integration tests.

#![allow(dead_code)]

use rand::{Rng, rngs::StdRng};
use tictactoe_ai::tictactoe::{Board, Cell, Symbol};

/// Brute-force win check: every window of `win_length` cells in all four
/// directions, starting from every cell.
pub fn reference_has_won(board: &Board, symbol: Symbol) -> bool {
    let n = board.size() as isize;
    let k = board.win_length() as isize;
    let target = symbol.to_cell();

    for row in 0..n {
        for col in 0..n {
            for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                let end_row = row + dr * (k - 1);
                let end_col = col + dc * (k - 1);
                if end_row < 0 || end_row >= n || end_col < 0 || end_col >= n {
                    continue;
                }
                if (0..k).all(|i| {
                    board.get((row + dr * i) as usize, (col + dc * i) as usize) == target
                }) {
                    return true;
                }
            }
        }
    }
    false
}

/// Board with each cell independently empty, X or O.
///
/// `fill` is the chance a cell is occupied. Positions need not be reachable
/// in a real game.
pub fn random_board(rng: &mut StdRng, size: usize, win_length: usize, fill: f64) -> Board {
    let mut board = Board::with_dimensions(size, win_length).unwrap();
    for row in 0..size {
        for col in 0..size {
            if rng.random_bool(fill) {
                let cell = if rng.random_bool(0.5) { Cell::X } else { Cell::O };
                board.set(row, col, cell);
            }
        }
    }
    board
}

/// Reachable position: `moves` alternating random placements starting with X,
/// stopping early if someone wins.
pub fn random_playout(rng: &mut StdRng, board: &mut Board, moves: usize) -> Symbol {
    let mut to_move = Symbol::X;
    for _ in 0..moves {
        let available = board.available_moves();
        if available.is_empty() || board.winner().is_some() {
            break;
        }
        let mv = available[rng.random_range(0..available.len())];
        board.place(mv, to_move).unwrap();
        to_move = to_move.opponent();
    }
    to_move
}
