//! Depth-limited minimax with alpha-beta pruning
//!
//! The search works in place on the caller's board: every candidate move is
//! placed with [`Board::probe`] and removed again before the next sibling is
//! tried, so the board is unchanged once a search returns.
//!
//! Scores are from the searching side's point of view:
//! - own win found at ply `d`: `10 - d`
//! - opponent win found at ply `d`: `d - 10`
//! - full board or depth cap: `0`

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Strategy,
    tictactoe::{Board, Move, Symbol},
};

/// Base score of a win; the ply at which it is found is subtracted
pub const WIN_SCORE: i32 = 10;

/// Depth cap used for a board side length.
///
/// Unsupported sizes fall back to 3 plies.
pub fn depth_for_size(size: usize) -> u32 {
    match size {
        3 => 6,
        5 => 4,
        9 => 2,
        _ => 3,
    }
}

/// Counters from the most recent search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Depth cap the search ran with
    pub depth_cap: u32,
    /// Positions visited below the root
    pub nodes: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
    /// Score of the chosen move
    pub best_score: Option<i32>,
}

/// Minimax policy with alpha-beta pruning
pub struct MinimaxStrategy {
    name: String,
    depth: Option<u32>,
    pruning: bool,
    stats: SearchStats,
}

// Static information for one search.
struct Search<'a> {
    me: Symbol,
    opponent: Symbol,
    max_depth: i32,
    pruning: bool,
    stats: &'a mut SearchStats,
}

impl Search<'_> {
    fn value(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if board.has_won(self.me) {
            return WIN_SCORE - depth;
        }
        if board.has_won(self.opponent) {
            return depth - WIN_SCORE;
        }
        if board.is_full() || depth >= self.max_depth {
            return 0;
        }

        let mover = if maximizing { self.me } else { self.opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in board.available_moves() {
            let score = board.probe(mv, mover, |b| {
                self.value(b, !maximizing, depth + 1, alpha, beta)
            });

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

impl MinimaxStrategy {
    /// Create a pruning search that picks its depth from the board size
    pub fn new(name: String) -> Self {
        Self {
            name,
            depth: None,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Search exactly `depth` plies regardless of board size
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth.max(1));
        self
    }

    /// Disable alpha-beta cutoffs (plain minimax, same result, more nodes)
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn depth_override(&self) -> Option<u32> {
        self.depth
    }

    /// Depth cap that applies to `board`
    pub fn depth_cap(&self, board: &Board) -> u32 {
        self.depth.unwrap_or_else(|| depth_for_size(board.size()))
    }

    /// Statistics of the last search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Score every available move for `me`, in row-major order.
    ///
    /// Each move is placed, searched with the opponent to reply at ply 1 and a
    /// fresh alpha-beta window, then removed.
    pub fn evaluate_moves(&mut self, board: &mut Board, me: Symbol) -> Vec<(Move, i32)> {
        let depth_cap = self.depth_cap(board);
        self.stats = SearchStats {
            depth_cap,
            ..SearchStats::default()
        };

        let mut search = Search {
            me,
            opponent: me.opponent(),
            max_depth: depth_cap as i32,
            pruning: self.pruning,
            stats: &mut self.stats,
        };

        board
            .available_moves()
            .into_iter()
            .map(|mv| {
                let score = board.probe(mv, me, |b| {
                    search.value(b, false, 1, i32::MIN, i32::MAX)
                });
                (mv, score)
            })
            .collect()
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, board: &mut Board, me: Symbol) -> Result<Move> {
        let mut best: Option<(Move, i32)> = None;
        for (mv, score) in self.evaluate_moves(board, me) {
            // Strict comparison keeps the earliest move on ties.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best.ok_or(Error::NoLegalMove)?;
        self.stats.best_score = Some(score);
        tracing::debug!(
            strategy = %self.name,
            depth = self.stats.depth_cap,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            score,
            mv = %mv,
            "search finished"
        );
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
