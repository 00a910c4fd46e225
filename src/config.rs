//! Per-match configuration.
//!
//! A [`GameConfig`] is fixed for the lifetime of a controller. Changing size,
//! symbol or difficulty means building a new controller from a new config.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardSize, Symbol};

/// AI strength levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random moves
    Easy,
    /// Win if possible, otherwise block, otherwise random
    Medium,
    /// Depth-limited alpha-beta search
    #[default]
    Hard,
    /// Same search as `Hard`
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Impossible => "impossible",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "impossible" => Ok(Difficulty::Impossible),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, medium, hard, impossible".to_string(),
            }),
        }
    }
}

/// Configuration for one match.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::config::{Difficulty, GameConfig};
/// use tictactoe_ai::tictactoe::{BoardSize, Symbol};
///
/// let config = GameConfig::new(BoardSize::Five)
///     .with_difficulty(Difficulty::Medium)
///     .with_human_symbol(Symbol::O)
///     .with_seed(7);
/// assert_eq!(config.win_length(), 4);
/// assert_eq!(config.ai_symbol(), Symbol::X);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board configuration; also fixes the win length
    pub size: BoardSize,
    /// Symbol the human plays; the AI takes the other one
    pub human_symbol: Symbol,
    /// Strategy used for AI turns
    pub difficulty: Difficulty,
    /// Seed for the random strategies
    #[serde(default)]
    pub seed: Option<u64>,
    /// Overrides the per-size search depth of the minimax strategies
    #[serde(default)]
    pub search_depth: Option<u32>,
}

impl GameConfig {
    /// Create a configuration with the human as X on `Hard`.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            human_symbol: Symbol::X,
            difficulty: Difficulty::default(),
            seed: None,
            search_depth: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_human_symbol(mut self, symbol: Symbol) -> Self {
        self.human_symbol = symbol;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = Some(depth);
        self
    }

    pub fn ai_symbol(&self) -> Symbol {
        self.human_symbol.opponent()
    }

    pub fn win_length(&self) -> usize {
        self.size.win_length()
    }

    /// Reject settings no strategy can run with.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for a zero search depth.
    pub fn validate(&self) -> crate::Result<()> {
        if self.search_depth == Some(0) {
            return Err(crate::Error::InvalidConfiguration {
                message: "search_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create config {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
