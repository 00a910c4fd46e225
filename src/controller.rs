//! Turn-taking state machine between a human and the configured strategy.
//!
//! ```text
//! AwaitingHumanMove --valid human move--> AwaitingAiMove --AI move--> AwaitingHumanMove
//!         |                                     |
//!         +------ win / full board ------> GameOver <----------------+
//!                                               |
//!                                            reset()
//! ```
//!
//! Moves that arrive in the wrong phase, on an occupied cell or off the board
//! are ignored and leave the board untouched.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    config::{Difficulty, GameConfig},
    ports::Strategy,
    strategy,
    tictactoe::{Board, BoardSize, Move, Symbol},
};

/// Final or current result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    HumanWin,
    AiWin,
    Draw,
}

/// Where the match currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingHumanMove,
    AwaitingAiMove,
    GameOver(Outcome),
}

/// Answer to a move submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether the move was applied
    pub accepted: bool,
    /// Whether the match is over after this call
    pub game_over: bool,
    pub outcome: Outcome,
}

/// Owns the board and the AI strategy for one match
pub struct GameController {
    config: GameConfig,
    board: Board,
    strategy: Box<dyn Strategy>,
    phase: Phase,
    last_result: MoveResult,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .field("phase", &self.phase)
            .finish()
    }
}

impl GameController {
    /// Create a controller with the strategy the config asks for.
    ///
    /// # Errors
    /// Returns an error if the configuration does not validate.
    pub fn new(config: GameConfig) -> Result<Self> {
        let strategy = strategy::for_config(&config);
        Self::with_strategy(config, strategy)
    }

    /// Create a controller around a caller-supplied strategy
    pub fn with_strategy(config: GameConfig, strategy: Box<dyn Strategy>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.size),
            config,
            strategy,
            phase: Phase::AwaitingHumanMove,
            last_result: MoveResult {
                accepted: false,
                game_over: false,
                outcome: Outcome::Ongoing,
            },
        })
    }

    /// Build a fresh controller/board pair from raw settings.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedBoardSize`] unless `size` is 3, 5 or 9.
    ///
    /// # Example
    /// ```
    /// use tictactoe_ai::{config::Difficulty, controller::GameController, tictactoe::Symbol};
    ///
    /// let game = GameController::configure(5, Difficulty::Medium, Symbol::O)?;
    /// assert_eq!(game.board_size(), 5);
    /// assert_eq!(game.config().win_length(), 4);
    /// # Ok::<(), tictactoe_ai::Error>(())
    /// ```
    pub fn configure(size: usize, difficulty: Difficulty, human_symbol: Symbol) -> Result<Self> {
        let config = GameConfig::new(BoardSize::from_side(size)?)
            .with_difficulty(difficulty)
            .with_human_symbol(human_symbol);
        Self::new(config)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Result of the most recent accepted or rejected move
    pub fn last_result(&self) -> MoveResult {
        self.last_result
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::GameOver(outcome) => outcome,
            _ => Outcome::Ongoing,
        }
    }

    /// Check a cell; off-board coordinates count as not empty
    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        self.board.contains(row, col) && self.board.is_cell_empty(row, col)
    }

    /// Apply the human's move if it is the human's turn and the cell is free
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> MoveResult {
        if self.phase != Phase::AwaitingHumanMove {
            tracing::debug!(row, col, phase = ?self.phase, "human move ignored: not human's turn");
            return self.reject();
        }

        let mv = Move::new(row, col);
        if let Err(err) = self.board.place(mv, self.config.human_symbol) {
            tracing::debug!(%err, "human move rejected");
            return self.reject();
        }

        tracing::debug!(mv = %mv, symbol = %self.config.human_symbol, "human move accepted");
        self.advance(self.config.human_symbol, Outcome::HumanWin, Phase::AwaitingAiMove)
    }

    /// Let the strategy pick and play the AI move.
    ///
    /// Returns `None` when it is not the AI's turn or no move was played. If
    /// the strategy finds no legal move, errors, or picks an unavailable cell,
    /// the match ends in a draw.
    pub fn request_ai_move(&mut self) -> Option<Move> {
        if self.phase != Phase::AwaitingAiMove {
            tracing::debug!(phase = ?self.phase, "AI move requested out of turn");
            return None;
        }

        let ai = self.config.ai_symbol();
        let mv = match self.strategy.select_move(&mut self.board, ai) {
            Ok(mv) => mv,
            Err(Error::NoLegalMove) => {
                self.finish(Outcome::Draw);
                return None;
            }
            Err(err) => {
                tracing::warn!(strategy = self.strategy.name(), %err, "strategy failed");
                self.finish(Outcome::Draw);
                return None;
            }
        };

        if let Err(err) = self.board.place(mv, ai) {
            tracing::warn!(strategy = self.strategy.name(), %err, "strategy chose an illegal move");
            self.finish(Outcome::Draw);
            return None;
        }

        tracing::debug!(mv = %mv, symbol = %ai, strategy = self.strategy.name(), "AI move played");
        self.advance(ai, Outcome::AiWin, Phase::AwaitingHumanMove);
        Some(mv)
    }

    /// Submit a human move and, if the game goes on, answer it with the AI move.
    ///
    /// Returns the result after the last move that was played.
    pub fn play_turn(&mut self, row: usize, col: usize) -> MoveResult {
        let human = self.submit_human_move(row, col);
        if human.accepted && !human.game_over {
            self.request_ai_move();
            return MoveResult {
                accepted: true,
                ..self.last_result
            };
        }
        human
    }

    /// Start over on an empty board with the same configuration
    pub fn reset(&mut self) {
        self.board.reset(self.config.size);
        self.phase = Phase::AwaitingHumanMove;
        self.last_result = MoveResult {
            accepted: false,
            game_over: false,
            outcome: Outcome::Ongoing,
        };
        tracing::debug!(size = %self.config.size, "board reset");
    }

    fn reject(&mut self) -> MoveResult {
        self.last_result = MoveResult {
            accepted: false,
            game_over: matches!(self.phase, Phase::GameOver(_)),
            outcome: self.outcome(),
        };
        self.last_result
    }

    // Terminal check after `mover` placed a mark.
    fn advance(&mut self, mover: Symbol, win: Outcome, next: Phase) -> MoveResult {
        if self.board.has_won(mover) {
            self.finish(win);
        } else if self.board.is_full() {
            self.finish(Outcome::Draw);
        } else {
            self.phase = next;
            self.last_result = MoveResult {
                accepted: true,
                game_over: false,
                outcome: Outcome::Ongoing,
            };
        }
        self.last_result
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::GameOver(outcome);
        self.last_result = MoveResult {
            accepted: true,
            game_over: true,
            outcome,
        };
        tracing::info!(?outcome, moves = self.board.occupied_count(), "game over");
    }
}
