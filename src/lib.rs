//! Tic-tac-toe engine with exhaustive game-tree search
//!
//! This crate provides:
//! - A 3x3 board with in-place move and undo
//! - Minimax and alpha-beta search sharing a transposition cache
//! - Strategy and observer ports with a turn loop built on them
//! - A timing comparison of the two search algorithms

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use config::PlayConfig;
pub use error::{Error, Result};
pub use search::{Algorithm, SearchResult, TranspositionCache, alpha_beta, minimax, search};
pub use tictactoe::{Board, Cell, GameOutcome, Move, Player};
