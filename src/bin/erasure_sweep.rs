//! Threshold sweep of the peeling decoder over the quantum erasure channel.

use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use peel::simulator::{simulate, SweepConfig};
use peel::CodeError;

#[derive(Parser, Debug)]
#[command(name = "erasure-sweep")]
#[command(about = "Simulate linear-time erasure decoding of the surface code")]
struct Args {
    /// Number of qubits on one side of the square lattice
    size: i32,

    /// Lowest physical erasure rate
    lower_bound: f64,

    /// Highest physical erasure rate
    upper_bound: f64,

    /// Number of erasure rates to simulate
    n_points: usize,

    /// Number of trials per erasure rate
    n_samples: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Confidence level of the reported failure rate interval
    #[arg(long, default_value_t = 0.95)]
    confidence: f64,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<(), CodeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = SweepConfig::new(
        args.size,
        args.lower_bound,
        args.upper_bound,
        args.n_points,
        args.n_samples,
    )?
    .with_seed(args.seed);

    let table = simulate(&config, !args.no_progress)?;

    let title = format!("surface code, size {}", args.size);
    println!("{}", title.as_str().bold());
    print!("{table}");
    println!();

    for (row, p) in table.error_rates().iter().enumerate() {
        let rate = table.failure_rate(row);
        let (low, high) = table.confidence_interval(row, args.confidence)?;
        let line = format!(
            "p = {:.4}: logical failure rate {:.5} ({:.0}% interval [{:.5}, {:.5}])",
            p,
            rate,
            args.confidence * 100.0,
            low,
            high
        );
        if rate > *p {
            println!("{}", line.as_str().red());
        } else {
            println!("{}", line.as_str().green());
        }
    }

    Ok(())
}
