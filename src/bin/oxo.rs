//! oxo - tic-tac-toe against exhaustive game-tree search
//!
//! This CLI provides:
//! - Human vs engine games (minimax or alpha-beta)
//! - Engine vs engine games
//! - A timing comparison of the two engines
//! - Best-move analysis for arbitrary positions

use anyhow::Result;
use clap::{Parser, Subcommand};
use oxo::cli::{commands, config::GlobalOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe with minimax and alpha-beta search", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a search engine
    Play(commands::play::PlayArgs),

    /// Watch two engines play each other
    Watch(commands::watch::WatchArgs),

    /// Time minimax against alpha-beta
    Benchmark(commands::benchmark::BenchmarkArgs),

    /// Find the best move for a position
    Analyze(commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.global.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.global.play_config()?;

    match cli.command {
        Commands::Play(args) => commands::play::execute(args, &config),
        Commands::Watch(args) => commands::watch::execute(args, &config),
        Commands::Benchmark(args) => commands::benchmark::execute(args),
        Commands::Analyze(args) => commands::analyze::execute(args),
    }
}
