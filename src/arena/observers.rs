//! Arena observers
//!
//! Observers collect progress and statistics during an arena run without the
//! arena knowing about any output format.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    arena::{GameOutcome, GameRecord},
    ports::MatchObserver,
    tictactoe::Symbol,
};

/// Progress bar observer - shows arena progress and X/O/draw counts
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    fn message(&self) -> String {
        format!("X:{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchObserver for ProgressObserver {
    fn on_arena_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, record: &GameRecord) -> Result<()> {
        match record.outcome {
            GameOutcome::Win(Symbol::X) => self.x_wins += 1,
            GameOutcome::Win(Symbol::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_arena_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Emits one `tracing` event per game
#[derive(Debug, Default)]
pub struct TracingObserver {
    total_games: usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchObserver for TracingObserver {
    fn on_arena_start(&mut self, total_games: usize) -> Result<()> {
        self.total_games = total_games;
        tracing::info!(total_games, "arena started");
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, record: &GameRecord) -> Result<()> {
        tracing::debug!(
            game = game_num + 1,
            of = self.total_games,
            x = record.x_entrant,
            o = record.o_entrant,
            outcome = ?record.outcome,
            moves = record.moves,
            "game finished"
        );
        Ok(())
    }

    fn on_arena_end(&mut self) -> Result<()> {
        tracing::info!(total_games = self.total_games, "arena finished");
        Ok(())
    }
}
