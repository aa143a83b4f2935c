use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use schedsim::workload::{generate, load_batch};
use schedsim::{report, PolicyRunner, Ticks, DEFAULT_QUANTUM};

/// Compare task dispatch order under five scheduling policies.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Task file of whitespace-separated `name priority burst` triples.
    #[arg(default_value = "schedule.txt")]
    file: PathBuf,

    /// Work units granted per rotation turn in the quantum policies.
    #[arg(long, default_value_t = DEFAULT_QUANTUM, value_parser = clap::value_parser!(u64).range(1..))]
    quantum: Ticks,

    /// Append per-policy average turnaround and waiting lines.
    #[arg(long)]
    stats: bool,

    /// Generate a random batch of N tasks instead of reading the file.
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// RNG seed for --random.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();
    let args = Args::parse();

    let batch = match args.random {
        Some(count) => generate::bernoulli_batch(count, 0.3, 4, 25, 5, args.seed),
        None => {
            let file = File::open(&args.file)
                .with_context(|| format!("opening task file '{}'", args.file.display()))?;
            load_batch(file)
                .with_context(|| format!("loading task file '{}'", args.file.display()))?
        }
    };
    log::info!("loaded {} tasks", batch.len());

    let runner = PolicyRunner::new(args.quantum);
    let runs = runner.run_all(&batch);

    let mut stdout = io::stdout().lock();
    report::render(&mut stdout, &batch, &runs, args.stats)?;

    Ok(())
}
