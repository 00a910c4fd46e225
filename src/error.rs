//! Error types for the tic-tac-toe engine

use thiserror::Error;

/// Main error type for the engine
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is out of bounds for a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("no legal moves available")]
    NoLegalMove,

    #[error("unsupported board size {size} (expected 3, 5 or 9)")]
    UnsupportedBoardSize { size: usize },

    #[error("win length {win_length} does not fit on a {size}x{size} board")]
    InvalidWinLength { size: usize, win_length: usize },

    #[error("row has {got} cells, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at row {row}, column {col} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
        context: String,
    },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },

    #[error("invalid symbol '{input}' (expected 'X' or 'O')")]
    ParseSymbol { input: String },

    #[error("invalid board size '{input}'. Expected one of: {expected}")]
    ParseBoardSize { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
