//! Round-robin matches between difficulty levels
//!
//! Every pair of entrants plays a fixed number of games on a fresh board,
//! alternating which entrant opens as X. Results are kept from the point of
//! view of the entrant listed first in the pair.

pub mod observers;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    config::Difficulty,
    ports::{MatchObserver, Strategy},
    strategy,
    tictactoe::{Board, BoardSize, Symbol},
};

pub use observers::{ProgressObserver, TracingObserver};

/// Outcome of a single arena game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Symbol),
    Draw,
}

/// One finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Entrant index that played X (and moved first)
    pub x_entrant: usize,
    /// Entrant index that played O
    pub o_entrant: usize,
    pub outcome: GameOutcome,
    /// Marks placed before the game ended
    pub moves: usize,
}

impl GameRecord {
    /// Index of the winning entrant, if any
    pub fn winner(&self) -> Option<usize> {
        match self.outcome {
            GameOutcome::Win(Symbol::X) => Some(self.x_entrant),
            GameOutcome::Win(Symbol::O) => Some(self.o_entrant),
            GameOutcome::Draw => None,
        }
    }
}

/// Head-to-head tally, from `first`'s perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub first: usize,
    pub second: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl MatchupRecord {
    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    first: &'a str,
    second: &'a str,
    wins: usize,
    draws: usize,
    losses: usize,
    win_rate: f64,
}

/// Result of an arena run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaResult {
    pub board_size: BoardSize,
    /// Entrant names, indexed like the matchup records
    pub entrants: Vec<String>,
    pub head_to_head: Vec<MatchupRecord>,
    pub total_games: usize,
}

impl ArenaResult {
    pub fn new(board_size: BoardSize, entrants: Vec<String>) -> Self {
        Self {
            board_size,
            entrants,
            head_to_head: Vec::new(),
            total_games: 0,
        }
    }

    /// Record a game between `first` and `second` (either may have played X)
    pub fn record_game(&mut self, first: usize, second: usize, game: &GameRecord) {
        let index = match self
            .head_to_head
            .iter()
            .position(|m| m.first == first && m.second == second)
        {
            Some(index) => index,
            None => {
                self.head_to_head.push(MatchupRecord {
                    first,
                    second,
                    wins: 0,
                    draws: 0,
                    losses: 0,
                });
                self.head_to_head.len() - 1
            }
        };

        let entry = &mut self.head_to_head[index];
        match game.winner() {
            Some(winner) if winner == first => entry.wins += 1,
            Some(_) => entry.losses += 1,
            None => entry.draws += 1,
        }
        self.total_games += 1;
    }

    pub fn matchup(&self, first: usize, second: usize) -> Option<&MatchupRecord> {
        self.head_to_head
            .iter()
            .find(|m| m.first == first && m.second == second)
    }

    /// Share of an entrant's games that it won
    pub fn win_rate(&self, entrant: usize) -> f64 {
        let mut wins = 0;
        let mut total = 0;

        for m in &self.head_to_head {
            if m.first == entrant {
                wins += m.wins;
                total += m.games();
            } else if m.second == entrant {
                wins += m.losses;
                total += m.games();
            }
        }

        if total == 0 {
            0.0
        } else {
            wins as f64 / total as f64
        }
    }

    /// Save result to JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let result: Self = serde_json::from_reader(file)?;
        for m in &result.head_to_head {
            result.entrant_name(m.first)?;
            result.entrant_name(m.second)?;
        }
        Ok(result)
    }

    fn entrant_name(&self, index: usize) -> Result<&str> {
        self.entrants
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::InvalidConfiguration {
                message: format!(
                    "matchup refers to entrant {index}, but only {} are listed",
                    self.entrants.len()
                ),
            })
    }

    /// Write one row per matchup; `win_rate` is a percentage
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for m in &self.head_to_head {
            let games = m.games();
            let win_rate = if games > 0 {
                m.wins as f64 / games as f64 * 100.0
            } else {
                0.0
            };
            writer.serialize(CsvRow {
                first: self.entrant_name(m.first)?,
                second: self.entrant_name(m.second)?,
                wins: m.wins,
                draws: m.draws,
                losses: m.losses,
                win_rate,
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// AI-versus-AI tournament on one board size
pub struct Arena {
    size: BoardSize,
    entrants: Vec<Difficulty>,
    seed: Option<u64>,
    search_depth: Option<u32>,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl Arena {
    pub fn new(size: BoardSize, entrants: Vec<Difficulty>) -> Self {
        Self {
            size,
            entrants,
            seed: None,
            search_depth: None,
            observers: Vec::new(),
        }
    }

    /// Seed the random strategies; entrant `i` gets `seed + i`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = Some(depth);
        self
    }

    /// Add an observer to the arena
    pub fn with_observer(mut self, observer: Box<dyn MatchObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    fn entrant_names(&self) -> Vec<String> {
        self.entrants
            .iter()
            .enumerate()
            .map(|(i, difficulty)| format!("{difficulty}-{}", i + 1))
            .collect()
    }

    /// Run a round-robin with `games_per_matchup` games for every pair
    pub fn run_round_robin(&mut self, games_per_matchup: usize) -> Result<ArenaResult> {
        if self.entrants.len() < 2 {
            return Err(Error::InvalidConfiguration {
                message: "an arena needs at least 2 entrants".to_string(),
            });
        }

        let mut strategies: Vec<Box<dyn Strategy>> = self
            .entrants
            .iter()
            .enumerate()
            .map(|(i, &difficulty)| {
                let seed = self.seed.map(|s| s.wrapping_add(i as u64));
                strategy::from_difficulty(difficulty, seed, self.search_depth)
            })
            .collect();

        let mut result = ArenaResult::new(self.size, self.entrant_names());
        let pairs = self.entrants.len() * (self.entrants.len() - 1) / 2;
        let total_games = pairs * games_per_matchup;

        for observer in &mut self.observers {
            observer.on_arena_start(total_games)?;
        }

        let mut game_num = 0;
        for first in 0..self.entrants.len() {
            for second in (first + 1)..self.entrants.len() {
                tracing::info!(
                    first = %result.entrants[first],
                    second = %result.entrants[second],
                    games = games_per_matchup,
                    "starting matchup"
                );
                for g in 0..games_per_matchup {
                    let (x, o) = if g % 2 == 0 {
                        (first, second)
                    } else {
                        (second, first)
                    };
                    let record = play_game(&mut strategies, self.size, x, o)?;
                    result.record_game(first, second, &record);

                    for observer in &mut self.observers {
                        observer.on_game_end(game_num, &record)?;
                    }
                    game_num += 1;
                }
            }
        }

        for observer in &mut self.observers {
            observer.on_arena_end()?;
        }

        Ok(result)
    }
}

/// Play one game between two strategies on an empty board; X moves first
pub fn play_game(
    strategies: &mut [Box<dyn Strategy>],
    size: BoardSize,
    x_entrant: usize,
    o_entrant: usize,
) -> Result<GameRecord> {
    let mut board = Board::new(size);
    let mut to_move = Symbol::X;
    let mut moves = 0;

    let outcome = loop {
        let entrant = match to_move {
            Symbol::X => x_entrant,
            Symbol::O => o_entrant,
        };
        let mv = strategies[entrant].select_move(&mut board, to_move)?;
        board.place(mv, to_move)?;
        moves += 1;

        if board.has_won(to_move) {
            break GameOutcome::Win(to_move);
        }
        if board.is_full() {
            break GameOutcome::Draw;
        }
        to_move = to_move.opponent();
    };

    Ok(GameRecord {
        x_entrant,
        o_entrant,
        outcome,
        moves,
    })
}
