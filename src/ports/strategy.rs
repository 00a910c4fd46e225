//! Strategy port - abstraction over AI move selection
//!
//! Every difficulty level is an implementation of this trait, so the
//! controller and the arena can drive any of them without knowing which one
//! they hold.

use crate::{
    Result,
    tictactoe::{Board, Move, Symbol},
};

/// Strategy trait - unified interface for all move-selection algorithms
///
/// Implementations may place speculative marks on `board` while deciding, but
/// must hand it back exactly as they received it.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::{
///     ports::Strategy,
///     tictactoe::{Board, BoardSize, Move, Symbol},
/// };
///
/// struct FirstFree;
///
/// impl Strategy for FirstFree {
///     fn select_move(&mut self, board: &mut Board, _me: Symbol) -> tictactoe_ai::Result<Move> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(tictactoe_ai::Error::NoLegalMove)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
///
///     fn as_any(&self) -> &dyn std::any::Any {
///         self
///     }
/// }
///
/// let mut board = Board::new(BoardSize::Three);
/// assert_eq!(FirstFree.select_move(&mut board, Symbol::O).unwrap(), Move::new(0, 0));
/// ```
pub trait Strategy: Send {
    /// Choose a move for `me` on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMove`] if the board has no empty cell.
    fn select_move(&mut self, board: &mut Board, me: Symbol) -> Result<Move>;

    /// Get the strategy's name.
    ///
    /// Used for identification in arena results and logging.
    fn name(&self) -> &str;

    /// Seed the strategy's internal random number generator.
    ///
    /// Deterministic strategies can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }

    /// Enable downcasting to concrete types.
    ///
    /// Callers use this to read strategy-specific data such as the search
    /// statistics of [`crate::strategy::MinimaxStrategy`].
    fn as_any(&self) -> &dyn std::any::Any;
}
