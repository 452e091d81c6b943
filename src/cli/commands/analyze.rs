//! Analyze command - search a single position with both engines

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        commands::parse_player_token,
        output::{print_kv, print_subsection},
    },
    search::{Algorithm, TranspositionCache},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Find the best move for a position")]
pub struct AnalyzeArgs {
    /// Board as nine cells read row by row, e.g. "XX.OO...."
    #[arg(long)]
    pub board: String,

    /// Player whose point of view scores the position
    #[arg(long, default_value = "x")]
    pub player: String,

    /// Search with the root as a minimizing node
    #[arg(long)]
    pub minimizing: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let player = parse_player_token(&args.player, "--player")?;
    let board = Board::from_string(&args.board)
        .with_context(|| format!("Invalid board '{}'", args.board))?;

    println!("\n{}", board.render());
    if let Some(outcome) = board.outcome() {
        println!("Game already finished: {outcome}");
    }

    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let mut scratch = board;
        let mut cache = TranspositionCache::new();
        let result = algorithm.search_with_cache(&mut scratch, !args.minimizing, player, &mut cache);
        let stats = cache.stats();

        print_subsection(&algorithm.to_string());
        let best_move = result
            .best_move
            .map_or_else(|| "none".to_string(), |pos| pos.to_string());
        print_kv("Best move", &best_move);
        print_kv("Value", &result.value.to_string());
        print_kv("Cached boards", &cache.len().to_string());
        print_kv("Nodes expanded", &stats.misses.to_string());
        print_kv("Cache hits", &stats.hits.to_string());
    }
    Ok(())
}
