//! lift-compare — run one arrivals file under several dispatch policies.
//!
//! Loads passengers from a headerless CSV (`name,yyyy-MM-dd HH:mm:ss,floor`),
//! builds a fresh simulation per policy, and prints each run's statistics
//! followed by a side-by-side table.  With `--output DIR`, each policy also
//! writes `DIR/<policy>/disembarks.csv` and `DIR/<policy>/summary.csv`.
//!
//! ```text
//! lift-compare --arrivals demos/compare/data/arrivals.csv \
//!              --config demos/compare/data/lift.toml --output ./out
//! RUST_LOG=lift_output=debug lift-compare --policy least-wait
//! ```

mod config;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{error, info};

use lift_arrivals::load_passengers_or_empty;
use lift_dispatch::PolicyKind;
use lift_output::{CsvWriter, LogObserver, SimOutputObserver};
use lift_sim::{PolicyRun, compare_policies_with};

use config::load_config_or_default;

#[derive(Debug, Parser)]
#[command(name = "lift-compare", about = "Compare elevator dispatch policies on one arrivals file")]
struct Args {
    /// Passenger arrivals CSV: name,instant,floor with no header row.
    #[arg(long, default_value = "arrivals.csv")]
    arrivals: PathBuf,

    /// Simulation parameters as TOML.  Missing keys take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Policy to run: round-robin, random, or least-wait.  Repeat for
    /// several; all three when omitted.
    #[arg(long = "policy", value_name = "NAME")]
    policies: Vec<PolicyKind>,

    /// Directory for per-policy CSV reports.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for the random policy.  Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut config = load_config_or_default(args.config.as_deref());
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let passengers = load_passengers_or_empty(&args.arrivals);
    if passengers.is_empty() {
        bail!("no passengers loaded from {}", args.arrivals.display());
    }

    let kinds = if args.policies.is_empty() {
        PolicyKind::ALL.to_vec()
    } else {
        args.policies.clone()
    };

    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)?;
    }

    info!(
        passengers = passengers.len(),
        elevators  = config.elevator_count,
        policies   = ?kinds.iter().map(|k| k.as_str()).collect::<Vec<_>>(),
        "comparing dispatch policies"
    );

    let output = args.output.as_deref();
    let runs = compare_policies_with(&config, &passengers, &kinds, |kind| {
        let csv = output.and_then(|dir| match CsvWriter::new(&dir.join(kind.as_str())) {
            Ok(writer) => Some(SimOutputObserver::new(writer)),
            Err(e) => {
                error!(policy = %kind, error = %e, "cannot open report files; skipping CSV output");
                None
            }
        });
        (LogObserver::new(), csv)
    })?;

    let mut failed = false;
    let mut summary: Vec<PolicyRun> = Vec::with_capacity(runs.len());
    for (run, (_, mut csv)) in runs {
        println!("{}\n", run.stats);
        if let Some(e) = csv.as_mut().and_then(SimOutputObserver::take_error) {
            error!(policy = %run.kind, error = %e, "report output failed");
            failed = true;
        }
        summary.push(run);
    }
    print_table(&summary);

    if failed {
        bail!("some reports could not be written");
    }
    Ok(())
}

fn print_table(runs: &[PolicyRun]) {
    let secs = |v: Option<f64>| v.map_or_else(|| "-".to_owned(), |m| format!("{m:.1}"));
    let max = |v: Option<lift_core::Secs>| v.map_or_else(|| "-".to_owned(), |s| s.as_i64().to_string());

    println!(
        "{:<12} {:>10} {:>10} {:>12} {:>10} {:>10}",
        "policy", "mean wait", "max wait", "mean total", "max total", "makespan"
    );
    for run in runs {
        let s = &run.stats;
        println!(
            "{:<12} {:>10} {:>10} {:>12} {:>10} {:>10}",
            run.kind.as_str(),
            secs(s.queue_wait.mean),
            max(s.queue_wait.max),
            secs(s.total.mean),
            max(s.total.max),
            max(s.makespan()),
        );
    }
}
