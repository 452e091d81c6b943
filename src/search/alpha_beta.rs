//! Minimax with alpha-beta pruning

use super::{Bound, Score, SearchResult, TranspositionCache, terminal_score};
use crate::tictactoe::{Board, Player};

/// Alpha-beta search with the same scoring and tie-breaking as
/// [`minimax`](super::minimax).
///
/// `alpha` is the value the maximizer is already guaranteed, `beta` the
/// value the minimizer is already guaranteed; pass
/// [`NEG_INFINITY`](super::NEG_INFINITY) and [`INFINITY`](super::INFINITY) at
/// the root. Both bounds are passed down by value. Once `beta <= alpha` the
/// remaining candidates of a node are skipped and the best result so far is
/// returned.
///
/// Results found under a narrowed window are cached as bounds rather than
/// exact values, and are only reused where the bound decides the window, so
/// the root move and value always match an unpruned search.
pub fn alpha_beta(
    board: &mut Board,
    is_maximizing: bool,
    player: Player,
    mut alpha: Score,
    mut beta: Score,
    cache: &mut TranspositionCache,
) -> SearchResult {
    let key = board.key();
    if let Some(cached) = cache.probe(&key, alpha, beta) {
        return cached;
    }

    if let Some(value) = terminal_score(board, player) {
        return SearchResult {
            best_move: None,
            value,
        };
    }

    let (window_alpha, window_beta) = (alpha, beta);
    let mover = if is_maximizing {
        player
    } else {
        player.opponent()
    };

    let mut best: Option<SearchResult> = None;
    for pos in board.free_positions() {
        board.place(pos, mover);
        let outcome = alpha_beta(board, !is_maximizing, player, alpha, beta, cache);
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

        if let Some(current) = best {
            if is_maximizing {
                alpha = alpha.max(current.value);
            } else {
                beta = beta.min(current.value);
            }
        }
        if beta <= alpha {
            break;
        }
    }

    // Non-terminal boards always have a free cell
    let best = best.unwrap_or(SearchResult {
        best_move: None,
        value: 0,
    });
    cache.put_bounded(
        key,
        best,
        Bound::classify(best.value, window_alpha, window_beta),
    );
    best
}
