//! Ports (trait boundaries) between the game core and its collaborators.
//!
//! The core only knows how to hold a board and search it. Who supplies moves
//! and who watches a game are defined here and implemented in
//! [`crate::pipeline`].

pub mod observer;
pub mod strategy;

pub use observer::Observer;
pub use strategy::Strategy;
