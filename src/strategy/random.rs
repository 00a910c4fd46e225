//! Uniform random move selection

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Strategy,
    tictactoe::{Board, Move, Symbol},
};

/// Random policy (baseline)
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a new random strategy
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random strategy with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sample one empty cell uniformly
    pub(crate) fn pick(&mut self, board: &Board) -> Result<Move> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMove);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &mut Board, _me: Symbol) -> Result<Move> {
        self.pick(board)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::BoardSize;

    #[test]
    fn test_random_picks_empty_cell() {
        let mut strategy = RandomStrategy::with_seed("easy".to_string(), 3);
        let mut board = Board::from_rows(&["XOX", "O.X", "OXO"], 3).unwrap();
        let mv = strategy.select_move(&mut board, Symbol::O).unwrap();
        assert_eq!(mv, Move::new(1, 1));
    }

    #[test]
    fn test_random_full_board() {
        let mut strategy = RandomStrategy::with_seed("easy".to_string(), 3);
        let mut board = Board::from_rows(&["XOX", "OOX", "XXO"], 3).unwrap();
        assert!(matches!(
            strategy.select_move(&mut board, Symbol::O),
            Err(Error::NoLegalMove)
        ));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut board = Board::new(BoardSize::Nine);
        let mut a = RandomStrategy::with_seed("a".to_string(), 42);
        let mut b = RandomStrategy::with_seed("b".to_string(), 7);
        b.set_rng_seed(42).unwrap();

        for _ in 0..20 {
            let mv_a = a.select_move(&mut board, Symbol::X).unwrap();
            let mv_b = b.select_move(&mut board, Symbol::X).unwrap();
            assert_eq!(mv_a, mv_b);
            board.place(mv_a, Symbol::X).unwrap();
        }
    }

    #[test]
    fn test_covers_every_cell_eventually() {
        let mut strategy = RandomStrategy::with_seed("easy".to_string(), 11);
        let mut board = Board::new(BoardSize::Three);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(strategy.select_move(&mut board, Symbol::O).unwrap());
        }
        assert_eq!(seen.len(), 9);
    }
}
