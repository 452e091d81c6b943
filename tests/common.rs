//! Shared helpers for walking legal game lines.

#![allow(dead_code)]

use std::collections::HashSet;

use oxo::{Board, Player};
use rand::{Rng, rngs::StdRng};

/// Every board reachable from the empty board by legal play, X opening.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        order.push(board);
        if board.is_terminal() {
            continue;
        }
        let mover = board.to_move();
        for pos in board.free_positions() {
            let mut child = board;
            assert!(child.place(pos, mover));
            stack.push(child);
        }
    }
    order
}

/// Play uniformly random legal moves until the game ends.
///
/// Returns the positions in play order together with every intermediate
/// board, starting with the empty one.
pub fn random_line(rng: &mut StdRng) -> (Vec<usize>, Vec<Board>) {
    let mut board = Board::new();
    let mut positions = Vec::new();
    let mut boards = vec![board];
    let mut mover = Player::X;

    while !board.is_terminal() {
        let free = board.free_positions();
        let pos = free[rng.random_range(0..free.len())];
        assert!(board.place(pos, mover));
        positions.push(pos);
        boards.push(board);
        mover = mover.opponent();
    }
    (positions, boards)
}
