//! Orchestration around the game core
//!
//! This module provides:
//! - Strategies that supply moves (search engines, a human at a terminal)
//! - The turn loop that alternates between two strategies
//! - Observers that render or log a game as it is played

pub mod observers;
pub mod runner;
pub mod strategies;

pub use observers::{ConsoleObserver, TracingObserver};
pub use runner::{GameRecord, GameRunner};
pub use strategies::{HumanStrategy, SearchStrategy};

pub use crate::ports::{Observer, Strategy};
