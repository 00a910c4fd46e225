//! Move-selection strategies, one per difficulty level
//!
//! - [`RandomStrategy`]: `Easy`
//! - [`HeuristicStrategy`]: `Medium`
//! - [`MinimaxStrategy`]: `Hard` and `Impossible`

pub mod heuristic;
pub mod minimax;
pub mod random;

pub use heuristic::HeuristicStrategy;
pub use minimax::{MinimaxStrategy, SearchStats, WIN_SCORE, depth_for_size};
pub use random::RandomStrategy;

use crate::{
    config::{Difficulty, GameConfig},
    ports::Strategy,
};

/// Build the strategy for a difficulty level.
///
/// `seed` feeds the random strategies; `search_depth` overrides the per-size
/// depth cap of the search strategies.
pub fn from_difficulty(
    difficulty: Difficulty,
    seed: Option<u64>,
    search_depth: Option<u32>,
) -> Box<dyn Strategy> {
    let name = difficulty.to_string();
    match difficulty {
        Difficulty::Easy => Box::new(match seed {
            Some(seed) => RandomStrategy::with_seed(name, seed),
            None => RandomStrategy::new(name),
        }),
        Difficulty::Medium => Box::new(match seed {
            Some(seed) => HeuristicStrategy::with_seed(name, seed),
            None => HeuristicStrategy::new(name),
        }),
        // Both levels run the same search; only `search_depth` separates them.
        Difficulty::Hard | Difficulty::Impossible => {
            let strategy = MinimaxStrategy::new(name);
            Box::new(match search_depth {
                Some(depth) => strategy.with_depth(depth),
                None => strategy,
            })
        }
    }
}

/// Build the strategy a match configuration asks for
pub fn for_config(config: &GameConfig) -> Box<dyn Strategy> {
    from_difficulty(config.difficulty, config.seed, config.search_depth)
}
