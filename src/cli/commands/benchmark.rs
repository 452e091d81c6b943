//! Benchmark command - time both search engines from the empty board

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    benchmark::{self, AlgorithmTiming, BenchmarkReport, DEFAULT_ITERATIONS},
    cli::output::{create_spinner, format_number, print_subsection},
};

#[derive(Parser, Debug)]
#[command(about = "Compare minimax and alpha-beta search times")]
pub struct BenchmarkArgs {
    /// Timed searches per algorithm
    #[arg(long, short = 'n', default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Write the report to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: BenchmarkArgs) -> Result<()> {
    let spinner = create_spinner("Timing searches...")?;
    let report = benchmark::run(args.iterations);
    spinner.finish_and_clear();

    print_report(&report);

    if let Some(path) = args.export {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)?;
        println!("\nReport exported to: {}", path.display());
    }
    Ok(())
}

fn print_report(report: &BenchmarkReport) {
    print_subsection("AI Performance Report");
    print_timing("Classic Minimax:", &report.minimax);
    print_timing("Optimized AB:", &report.alpha_beta);
    println!("Performance gain: {:.1}% faster", report.speedup_percent);
}

fn print_timing(label: &str, timing: &AlgorithmTiming) {
    println!(
        "{label:<17}{:.6}s per decision ({} nodes)",
        timing.per_decision.as_secs_f64(),
        format_number(timing.nodes_expanded)
    );
}
