//! Transposition cache shared through one search call tree

use std::collections::HashMap;

use serde::Serialize;

use super::{Score, SearchResult};
use crate::tictactoe::BoardKey;

/// How a cached value relates to the true minimax value of its board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The value is the minimax value
    Exact,
    /// The true value is at least the cached one (search failed high)
    Lower,
    /// The true value is at most the cached one (search failed low)
    Upper,
}

impl Bound {
    /// Classify a value computed under the window `(alpha, beta)`
    pub fn classify(value: Score, alpha: Score, beta: Score) -> Bound {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

/// A stored search result and the kind of bound it represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub result: SearchResult,
    pub bound: Bound,
}

impl CacheEntry {
    /// Whether this entry settles a node searched with `(alpha, beta)`
    pub fn settles(&self, alpha: Score, beta: Score) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.result.value >= beta,
            Bound::Upper => self.result.value <= alpha,
        }
    }
}

/// Counters describing how a cache was used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to search; equals the number of expanded nodes
    pub misses: u64,
    /// Entries written
    pub stores: u64,
}

/// Board configuration to search result, with no eviction.
///
/// Keys are the nine cells only, so values are meaningful for a single root
/// `player`: every entry's sign is relative to the player the search was
/// started for. Reusing one cache for searches on behalf of different root
/// players returns wrong results. Create a fresh cache per top-level call
/// unless the caller keeps the root player fixed.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<BoardKey, CacheEntry>,
    stats: CacheStats,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an exact result for `key`
    pub fn get(&mut self, key: &BoardKey) -> Option<SearchResult> {
        match self.entries.get(key) {
            Some(entry) if entry.bound == Bound::Exact => {
                self.stats.hits += 1;
                Some(entry.result)
            }
            _ => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Look up a result that is usable inside the window `(alpha, beta)`
    pub fn probe(&mut self, key: &BoardKey, alpha: Score, beta: Score) -> Option<SearchResult> {
        match self.entries.get(key) {
            Some(entry) if entry.settles(alpha, beta) => {
                self.stats.hits += 1;
                Some(entry.result)
            }
            _ => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Store an exact result
    pub fn put(&mut self, key: BoardKey, result: SearchResult) {
        self.put_bounded(key, result, Bound::Exact);
    }

    /// Store a result together with its bound kind
    pub fn put_bounded(&mut self, key: BoardKey, result: SearchResult, bound: Bound) {
        self.stats.stores += 1;
        self.entries.insert(key, CacheEntry { result, bound });
    }

    /// Raw entry access, without touching the counters
    pub fn entry(&self, key: &BoardKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop all entries and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}
