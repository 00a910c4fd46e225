//! Observer port - hooks into arena runs
//!
//! Progress bars, logs or custom statistics attach to an arena through this
//! trait without the arena knowing about any output format.

use crate::{Result, arena::GameRecord};

/// Observer trait for monitoring an arena run
///
/// # Event Sequence
///
/// 1. `on_arena_start(total_games)` - once at the beginning
/// 2. `on_game_end(game_num, record)` - after every game
/// 3. `on_arena_end()` - once at the end
///
/// # Examples
///
/// ```
/// use tictactoe_ai::{arena::GameRecord, ports::MatchObserver};
///
/// struct Counter {
///     games: usize,
/// }
///
/// impl MatchObserver for Counter {
///     fn on_game_end(&mut self, _game_num: usize, _record: &GameRecord) -> tictactoe_ai::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait MatchObserver: Send {
    /// Called before the first game with the number of games to be played.
    fn on_arena_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each game reaches a terminal state.
    ///
    /// `game_num` is 0-based across the whole run.
    fn on_game_end(&mut self, _game_num: usize, _record: &GameRecord) -> Result<()> {
        Ok(())
    }

    /// Called after the last game.
    fn on_arena_end(&mut self) -> Result<()> {
        Ok(())
    }
}
