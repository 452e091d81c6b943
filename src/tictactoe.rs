//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, BoardKey, Cell, Player};
pub use game::{GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
