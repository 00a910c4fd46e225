//! One-ply lookahead: win, else block, else random

use crate::{
    Error, Result,
    ports::Strategy,
    tictactoe::{Board, Move, Symbol},
};

use super::random::RandomStrategy;

/// Heuristic policy
///
/// This strategy will:
/// 1. Play any move that wins on the spot
/// 2. Otherwise block any cell where the opponent would win next
/// 3. Otherwise play randomly
///
/// Both lookahead passes place a speculative mark, test it and take it back.
pub struct HeuristicStrategy {
    name: String,
    fallback: RandomStrategy,
}

impl HeuristicStrategy {
    /// Create a new heuristic strategy
    pub fn new(name: String) -> Self {
        let fallback = RandomStrategy::new(format!("{name}-fallback"));
        Self { name, fallback }
    }

    /// Create a heuristic strategy with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        let fallback = RandomStrategy::with_seed(format!("{name}-fallback"), seed);
        Self { name, fallback }
    }

    /// First empty cell (row-major) that completes a run for `symbol`
    pub fn find_winning_move(board: &mut Board, symbol: Symbol) -> Option<Move> {
        board
            .available_moves()
            .into_iter()
            .find(|&mv| board.probe(mv, symbol, |b| b.has_won(symbol)))
    }
}

impl Strategy for HeuristicStrategy {
    fn select_move(&mut self, board: &mut Board, me: Symbol) -> Result<Move> {
        if board.is_full() {
            return Err(Error::NoLegalMove);
        }

        if let Some(winning) = Self::find_winning_move(board, me) {
            tracing::trace!(strategy = %self.name, mv = %winning, "taking immediate win");
            return Ok(winning);
        }

        if let Some(blocking) = Self::find_winning_move(board, me.opponent()) {
            tracing::trace!(strategy = %self.name, mv = %blocking, "blocking opponent");
            return Ok(blocking);
        }

        self.fallback.pick(board)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.fallback.set_rng_seed(seed)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
