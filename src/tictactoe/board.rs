//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the board
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
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_symbol(self) -> Option<Symbol> {
        match self {
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
            Cell::Empty => None,
        }
    }
}

/// One of the two marks a side plays with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Get the other symbol
    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Convert symbol to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Symbol {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Symbol::X),
            "O" => Ok(Symbol::O),
            _ => Err(crate::Error::ParseSymbol {
                input: s.to_string(),
            }),
        }
    }
}

/// The three supported board configurations.
///
/// Each size carries its own win length: three in a row on 3x3, four on 5x5
/// and five on 9x9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BoardSize {
    #[default]
    Three,
    Five,
    Nine,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Three, BoardSize::Five, BoardSize::Nine];

    /// Side length of the square grid
    pub fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Five => 5,
            BoardSize::Nine => 9,
        }
    }

    /// Number of consecutive marks needed to win
    pub fn win_length(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Five => 4,
            BoardSize::Nine => 5,
        }
    }

    /// Map a side length onto a supported size.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedBoardSize`] for anything but 3, 5 or 9.
    pub fn from_side(side: usize) -> Result<Self, crate::Error> {
        match side {
            3 => Ok(BoardSize::Three),
            5 => Ok(BoardSize::Five),
            9 => Ok(BoardSize::Nine),
            size => Err(crate::Error::UnsupportedBoardSize { size }),
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side();
        write!(f, "{side}x{side}")
    }
}

impl FromStr for BoardSize {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let side_part = match trimmed.split_once('x') {
            Some((rows, cols)) if rows == cols => rows.to_string(),
            Some(_) => String::new(),
            None => trimmed.clone(),
        };
        side_part
            .parse::<usize>()
            .ok()
            .and_then(|side| BoardSize::from_side(side).ok())
            .ok_or_else(|| crate::Error::ParseBoardSize {
                input: s.to_string(),
                expected: "3x3, 5x5, 9x9".to_string(),
            })
    }
}

impl TryFrom<String> for BoardSize {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BoardSize> for String {
    fn from(size: BoardSize) -> Self {
        size.to_string()
    }
}

/// A (row, column) coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of cells plus the win length that applies to it.
///
/// Cells are stored row-major. `get`/`set`/`clear` trust their coordinates;
/// use [`Board::place`] when the coordinates come from outside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board for one of the supported configurations
    pub fn new(size: BoardSize) -> Self {
        Self {
            size: size.side(),
            win_length: size.win_length(),
            cells: vec![Cell::Empty; size.side() * size.side()],
        }
    }

    /// Create an empty board of arbitrary dimensions.
    ///
    /// # Errors
    ///
    /// Returns error if the win length is zero or longer than the side.
    pub fn with_dimensions(size: usize, win_length: usize) -> Result<Self, crate::Error> {
        if size == 0 || win_length == 0 || win_length > size {
            return Err(crate::Error::InvalidWinLength { size, win_length });
        }
        Ok(Self {
            size,
            win_length,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Parse a board from one string per row (`X`, `O`, `.` for empty).
    ///
    /// Whitespace inside a row is ignored, so `"X . O"` and `"X.O"` are the same.
    ///
    /// # Errors
    ///
    /// Returns error if a row length differs from the number of rows, a
    /// character is not a cell, or the win length does not fit.
    pub fn from_rows(rows: &[&str], win_length: usize) -> Result<Self, crate::Error> {
        let mut board = Self::with_dimensions(rows.len(), win_length)?;
        let context = rows.join("/");

        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != board.size {
                return Err(crate::Error::InvalidBoardLength {
                    expected: board.size,
                    got: chars.len(),
                    context,
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    row,
                    col,
                    context: context.clone(),
                })?;
                board.set(row, col, cell);
            }
        }

        Ok(board)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(self.contains(row, col), "({row}, {col}) outside board");
        row * self.size + col
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Check that a coordinate lies on the board
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Set a cell back to empty
    pub fn clear(&mut self, row: usize, col: usize) {
        self.set(row, col, Cell::Empty);
    }

    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Place a mark after validating the coordinate and occupancy
    pub fn place(&mut self, mv: Move, symbol: Symbol) -> Result<(), crate::Error> {
        if !self.contains(mv.row, mv.col) {
            return Err(crate::Error::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        if !self.is_cell_empty(mv.row, mv.col) {
            return Err(crate::Error::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.set(mv.row, mv.col, symbol.to_cell());
        Ok(())
    }

    /// Place `symbol` at `mv`, run `f` on the speculative board, then undo.
    ///
    /// `mv` must be empty. `f` must leave every other cell as it found it.
    pub fn probe<R>(&mut self, mv: Move, symbol: Symbol, f: impl FnOnce(&mut Board) -> R) -> R {
        debug_assert!(self.is_cell_empty(mv.row, mv.col));
        self.set(mv.row, mv.col, symbol.to_cell());
        let result = f(self);
        self.clear(mv.row, mv.col);
        result
    }

    /// Wipe every cell and adopt a new configuration
    pub fn reset(&mut self, size: BoardSize) {
        *self = Self::new(size);
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// All empty cells in row-major order
    pub fn available_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::new(i / self.size, i % self.size))
            .collect()
    }

    /// Check if a symbol has a winning run
    pub fn has_won(&self, symbol: Symbol) -> bool {
        LineAnalyzer::has_won(self, symbol)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Symbol> {
        if self.has_won(Symbol::X) {
            Some(Symbol::X)
        } else if self.has_won(Symbol::O) {
            Some(Symbol::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &cell in cells {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
