//! Command-line interface for the `oxo` binary
//!
//! Commands cover playing against a search engine, watching two engines
//! play each other, benchmarking, and analyzing single positions.

pub mod commands;
pub mod config;
pub mod output;
