//! Watch command - two search engines play each other

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    config::PlayConfig,
    pipeline::{SearchStrategy, Strategy},
    search::Algorithm,
};

#[derive(Parser, Debug)]
#[command(about = "Watch two engines play each other")]
pub struct WatchArgs {
    /// Engine playing X
    #[arg(long, value_enum, default_value_t = Algorithm::Minimax)]
    pub x: Algorithm,

    /// Engine playing O
    #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
    pub o: Algorithm,
}

fn engine(algorithm: Algorithm) -> SearchStrategy {
    match algorithm {
        Algorithm::Minimax => SearchStrategy::minimax(),
        Algorithm::AlphaBeta => SearchStrategy::alpha_beta(),
    }
}

pub fn execute(args: WatchArgs, config: &PlayConfig) -> Result<()> {
    let mut x = engine(args.x);
    let mut o = engine(args.o);

    print_section("TIC-TAC-TOE");
    println!("\nAI Showdown: {} vs {}", x.name(), o.name());

    let record = super::build_runner(config).play(&mut x, &mut o)?;

    if !config.show_moves {
        println!("\n{}", record.board.render());
    }
    print_kv("Result", &record.outcome.to_string());
    print_kv("Moves", &record.moves.len().to_string());
    Ok(())
}
