//! Play command - a human against one of the search engines

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{commands::parse_player_token, output::print_section},
    config::PlayConfig,
    pipeline::{HumanStrategy, SearchStrategy, Strategy},
    search::Algorithm,
    tictactoe::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against a search engine")]
pub struct PlayArgs {
    /// Engine to play against
    #[arg(long, value_enum, default_value_t = Algorithm::Minimax)]
    pub opponent: Algorithm,

    /// Mark the human plays (`x` moves first)
    #[arg(long, default_value = "x")]
    pub human_mark: String,
}

pub fn execute(args: PlayArgs, config: &PlayConfig) -> Result<()> {
    let human_mark = parse_player_token(&args.human_mark, "--human-mark")?;

    let mut human = HumanStrategy::new("Human".to_string(), io::stdin().lock(), io::stdout());
    let mut engine = match args.opponent {
        Algorithm::Minimax => SearchStrategy::minimax(),
        Algorithm::AlphaBeta => SearchStrategy::alpha_beta(),
    };

    print_section("TIC-TAC-TOE");
    println!(
        "\nHuman ({human_mark}) vs {} ({})",
        engine.name(),
        human_mark.opponent()
    );

    let mut runner = super::build_runner(config);
    let record = match human_mark {
        Player::X => runner.play(&mut human, &mut engine)?,
        Player::O => runner.play(&mut engine, &mut human)?,
    };

    if !config.show_moves {
        println!("{}", record.board.render());
    }
    match record.outcome {
        GameOutcome::Win(winner) if winner == human_mark => println!("\nYou win!"),
        GameOutcome::Win(_) => println!("\n{} wins.", engine.name()),
        GameOutcome::Draw => println!("\nDraw."),
    }
    Ok(())
}
