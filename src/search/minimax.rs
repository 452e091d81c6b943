//! Exhaustive minimax search

use super::{SearchResult, TranspositionCache, terminal_score};
use crate::tictactoe::{Board, Player};

/// Find the best move for the side to move by full backward induction.
///
/// `player` is the root perspective: positive values favour it. When
/// `is_maximizing` is true the side to move is `player`, otherwise its
/// opponent. Candidates are tried in ascending position order and only a
/// strictly better value replaces the current best, so ties resolve to the
/// lowest position.
pub fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    player: Player,
    cache: &mut TranspositionCache,
) -> SearchResult {
    let key = board.key();
    if let Some(cached) = cache.get(&key) {
        return cached;
    }

    if let Some(value) = terminal_score(board, player) {
        return SearchResult {
            best_move: None,
            value,
        };
    }

    let mover = if is_maximizing {
        player
    } else {
        player.opponent()
    };

    let mut best: Option<SearchResult> = None;
    for pos in board.free_positions() {
        board.place(pos, mover);
        let outcome = minimax(board, !is_maximizing, player, cache);
        board.undo(pos);

        let improves = match best {
            None => true,
            Some(current) if is_maximizing => outcome.value > current.value,
            Some(current) => outcome.value < current.value,
        };
        if improves {
            best = Some(SearchResult {
                best_move: Some(pos),
                value: outcome.value,
            });
        }
    }

    // Non-terminal boards always have a free cell
    let best = best.unwrap_or(SearchResult {
        best_move: None,
        value: 0,
    });
    cache.put(key, best);
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(board: &str, is_maximizing: bool, player: Player) -> SearchResult {
        let mut board = Board::from_string(board).unwrap();
        let mut cache = TranspositionCache::new();
        minimax(&mut board, is_maximizing, player, &mut cache)
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X .
        // O O .
        // . . .
        let result = run("XX.OO....", true, Player::X);
        assert_eq!(result.best_move, Some(2));
        // Four cells remain after the winning move
        assert_eq!(result.value, 5);
    }

    #[test]
    fn test_blocks_opponent() {
        // X X .
        // . O .
        // . . .
        let result = run("XX..O....", true, Player::O);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_minimizing_root_plays_for_opponent() {
        // Same position, but the side to move is the opponent of the root player
        let result = run("XX.OO....", false, Player::O);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.value, -5);
    }

    #[test]
    fn test_tie_prefers_lowest_position() {
        // X X .
        // X O .
        // . . O
        // Both 2 and 6 win at once for X
        let result = run("XX.XO...O", true, Player::X);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.value, 4);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let result = run("XXXOO....", true, Player::X);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, 5);

        let result = run("XOXXOOOXX", true, Player::O);
        assert_eq!(result, SearchResult { best_move: None, value: 0 });
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let result = run(".........", true, Player::X);
        assert_eq!(result.value, 0);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_cache_is_filled_and_reused() {
        let mut board = Board::new();
        let mut cache = TranspositionCache::new();
        let first = minimax(&mut board, true, Player::X, &mut cache);
        assert!(!cache.is_empty());
        assert!(cache.stats().hits > 0);

        let misses = cache.stats().misses;
        let second = minimax(&mut board, true, Player::X, &mut cache);
        assert_eq!(first, second);
        // Root answered straight from the cache
        assert_eq!(cache.stats().misses, misses);
    }
}
