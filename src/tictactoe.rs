//! Board, moves and win detection

pub mod board;
pub mod lines;

pub use board::{Board, BoardSize, Cell, Move, Symbol};
pub use lines::LineAnalyzer;
