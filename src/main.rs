// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! apcheck CLI
//!
//! Lists the partitions of `[START..=END]` without arithmetic progressions.

use anyhow::Context;
use ap_partitions::{EvaluationConfig, Mode, PartitionEvaluator, Report};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "apcheck")]
#[command(version)]
#[command(about = "Find bipartitions of an integer range without arithmetic progressions")]
#[command(long_about = "
For a set of sequential, contiguous integers [n, n + 1, ..., k], list the
palindromic partition schemes whose side 1 has no arithmetic progression of
length P and whose side 0 has none of length Q.
")]
struct Cli {
    /// Starting number n (greater than 0)
    #[arg(allow_negative_numbers = true)]
    start: i64,

    /// Ending number k (at least n)
    #[arg(allow_negative_numbers = true)]
    end: i64,

    /// Progression length forbidden on side 1
    #[arg(short, default_value_t = 4)]
    p: usize,

    /// Progression length forbidden on side 0
    #[arg(short, default_value_t = 4)]
    q: usize,

    /// Stop after the first qualifying partition
    #[arg(long)]
    first_match: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// List the values on each side of every partition
    #[arg(long)]
    show_sides: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.first_match {
        Mode::FirstMatch
    } else {
        Mode::Exhaustive
    };
    let config = EvaluationConfig::new(cli.start, cli.end, cli.p, cli.q, mode)
        .context("invalid input")?;

    let mut evaluator = PartitionEvaluator::new(config);
    evaluator.evaluate()?;
    let results = evaluator.results().context("evaluation did not finish")?;
    let report = Report::new(&config, results, evaluator.statistics()).with_sides(cli.show_sides);

    match cli.format {
        Format::Text => print!("{}", report),
        Format::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
