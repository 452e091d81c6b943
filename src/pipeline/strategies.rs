//! Move suppliers: search engines and a human at a terminal

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    Error, Result,
    ports::Strategy,
    search::{Algorithm, TranspositionCache},
    tictactoe::{Board, Player},
};

/// Strategy backed by one of the search engines.
///
/// The cache is kept between moves because the strategy always searches as
/// the maximizing side for its own mark. If it is ever asked to move for the
/// other mark the cache is cleared first, since cached values are only valid
/// for one root player.
pub struct SearchStrategy {
    algorithm: Algorithm,
    name: String,
    cache: TranspositionCache,
    cache_owner: Option<Player>,
    reuse_cache: bool,
}

impl SearchStrategy {
    /// Create a strategy for the given algorithm
    pub fn new(algorithm: Algorithm, name: String) -> Self {
        Self {
            algorithm,
            name,
            cache: TranspositionCache::new(),
            cache_owner: None,
            reuse_cache: true,
        }
    }

    /// Plain minimax strategy
    pub fn minimax() -> Self {
        Self::new(Algorithm::Minimax, "Minimax AI".to_string())
    }

    /// Alpha-beta strategy
    pub fn alpha_beta() -> Self {
        Self::new(Algorithm::AlphaBeta, "Alpha-Beta AI".to_string())
    }

    /// Start every move from an empty cache
    pub fn with_fresh_cache_per_move(mut self) -> Self {
        self.reuse_cache = false;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    fn prepare_cache(&mut self, player: Player) {
        if !self.reuse_cache || self.cache_owner != Some(player) {
            self.cache.clear();
            self.cache_owner = Some(player);
        }
    }
}

impl Strategy for SearchStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        self.prepare_cache(player);

        // Search a scratch copy; the runner applies the chosen move itself
        let mut scratch = *board;
        let result = self
            .algorithm
            .search_with_cache(&mut scratch, true, player, &mut self.cache);
        debug!(
            strategy = %self.name,
            %player,
            best_move = ?result.best_move,
            value = result.value,
            cached = self.cache.len(),
            "move selected"
        );
        result.best_move.ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Interactive player reading positions line by line.
///
/// Bad input never leaves this strategy: non-numbers, out-of-range numbers
/// and occupied cells all lead to a new prompt.
pub struct HumanStrategy<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    fn prompt(&mut self, player: Player) -> Result<Option<String>> {
        write!(self.output, "{player}, choose your position (0-8): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        let free = board.free_positions();
        if free.is_empty() {
            return Err(Error::NoValidMoves);
        }

        loop {
            let Some(answer) = self.prompt(player)? else {
                return Err(Error::InputClosed);
            };

            match answer.parse::<usize>() {
                Ok(position) if free.contains(&position) => return Ok(position),
                Ok(position) if position < 9 => {
                    writeln!(self.output, "Position already taken. Try again.")?;
                }
                _ => {
                    writeln!(self.output, "Please enter a number between 0-8.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn human(input: &str) -> HumanStrategy<Cursor<Vec<u8>>, Vec<u8>> {
        HumanStrategy::new(
            "Human".to_string(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    #[test]
    fn test_search_strategy_takes_win() {
        let board = Board::from_string("XX.OO....").unwrap();
        for mut strategy in [SearchStrategy::minimax(), SearchStrategy::alpha_beta()] {
            assert_eq!(strategy.select_move(&board, Player::X).unwrap(), 2);
        }
    }

    #[test]
    fn test_search_strategy_does_not_touch_board() {
        let board = Board::from_string("X...O....").unwrap();
        let before = board;
        let mut strategy = SearchStrategy::minimax();
        strategy.select_move(&board, Player::X).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_strategy_rejects_finished_board() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut strategy = SearchStrategy::alpha_beta();
        assert!(matches!(
            strategy.select_move(&board, Player::O),
            Err(Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_cache_cleared_when_mark_changes() {
        let mut strategy = SearchStrategy::minimax();
        strategy.select_move(&Board::new(), Player::X).unwrap();
        let filled = strategy.cache().len();
        assert!(filled > 0);

        // Same mark: the cache survives and the root is answered from it
        let before = strategy.cache().stats();
        strategy.select_move(&Board::new(), Player::X).unwrap();
        let after = strategy.cache().stats();
        assert_eq!(strategy.cache().len(), filled);
        assert_eq!(after.hits, before.hits + 1);
        assert_eq!(after.misses, before.misses);

        // Other mark: start over
        let board = Board::from_string("X........").unwrap();
        strategy.select_move(&board, Player::O).unwrap();
        assert!(strategy.cache().len() < filled);
    }

    #[test]
    fn test_fresh_cache_per_move() {
        let mut strategy = SearchStrategy::minimax().with_fresh_cache_per_move();
        strategy.select_move(&Board::new(), Player::X).unwrap();
        let single = strategy.cache().stats();

        strategy.select_move(&Board::new(), Player::X).unwrap();
        assert_eq!(strategy.cache().stats(), single);
    }

    #[test]
    fn test_human_reprompts_until_valid() {
        let board = Board::from_string("X........").unwrap();
        let mut strategy = human("abc\n0\n42\n4\n");

        assert_eq!(strategy.select_move(&board, Player::O).unwrap(), 4);

        let transcript = String::from_utf8(strategy.output.clone()).unwrap();
        assert_eq!(transcript.matches("O, choose your position (0-8): ").count(), 4);
        assert_eq!(transcript.matches("Please enter a number between 0-8.").count(), 2);
        assert_eq!(transcript.matches("Position already taken. Try again.").count(), 1);
    }

    #[test]
    fn test_human_input_closed() {
        let mut strategy = human("");
        assert!(matches!(
            strategy.select_move(&Board::new(), Player::X),
            Err(Error::InputClosed)
        ));
        assert!(strategy.is_interactive());
    }
}
