//! Adversarial search over the board
//!
//! Two engines share one contract:
//! - [`minimax`] explores the whole game tree below the current board
//! - [`alpha_beta`] prunes branches that cannot change the decision
//!
//! Both mutate the board in place and restore it before returning, score
//! terminal positions relative to a fixed root `player`, break ties in favour
//! of the lowest position, and memoize through a [`TranspositionCache`].

pub mod alpha_beta;
pub mod cache;
pub mod minimax;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use alpha_beta::alpha_beta;
pub use cache::{Bound, CacheEntry, CacheStats, TranspositionCache};
pub use minimax::minimax;

use crate::tictactoe::{Board, Player};

/// Search value, positive when the root player is winning
pub type Score = i32;

/// Bound below every reachable score
pub const NEG_INFINITY: Score = Score::MIN;

/// Bound above every reachable score
pub const INFINITY: Score = Score::MAX;

/// Best move found for a board and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// `None` when the board was already terminal
    pub best_move: Option<usize>,
    pub value: Score,
}

/// Score a finished board from `player`'s point of view.
///
/// Wins and losses are scaled by the number of empty cells plus one, so that
/// quicker wins and slower losses are preferred. Returns `None` while the
/// game is still open.
pub fn terminal_score(board: &Board, player: Player) -> Option<Score> {
    let scale = board.remaining_count() as Score + 1;
    match board.winner() {
        Some(winner) if winner == player => Some(scale),
        Some(_) => Some(-scale),
        None if !board.has_moves() => Some(0),
        None => None,
    }
}

/// Search algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Exhaustive minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

impl Algorithm {
    /// Run this algorithm with a caller-owned cache
    pub fn search_with_cache(
        self,
        board: &mut Board,
        is_maximizing: bool,
        player: Player,
        cache: &mut TranspositionCache,
    ) -> SearchResult {
        match self {
            Algorithm::Minimax => minimax(board, is_maximizing, player, cache),
            Algorithm::AlphaBeta => {
                alpha_beta(board, is_maximizing, player, NEG_INFINITY, INFINITY, cache)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "Minimax"),
            Algorithm::AlphaBeta => write!(f, "Alpha-Beta"),
        }
    }
}

/// Search `board` with a fresh cache.
///
/// The board is left exactly as it was passed in.
pub fn search(
    board: &mut Board,
    is_maximizing: bool,
    player: Player,
    algorithm: Algorithm,
) -> SearchResult {
    let mut cache = TranspositionCache::new();
    let result = algorithm.search_with_cache(board, is_maximizing, player, &mut cache);
    let stats = cache.stats();
    debug!(
        %algorithm,
        %player,
        is_maximizing,
        best_move = ?result.best_move,
        value = result.value,
        cached = cache.len(),
        hits = stats.hits,
        expanded = stats.misses,
        "search finished"
    );
    result
}
