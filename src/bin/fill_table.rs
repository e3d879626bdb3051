use std::collections::HashSet;

use clap::Parser;
use cuckoo_table::CuckooTable;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Fill cuckoo tables with random keys and report the load reached before the
/// first rejected insert.
#[derive(Parser, Debug)]
#[command()]
struct Args {
    #[arg(long, default_value_t = 1_024)]
    size: usize,

    #[arg(long, default_value_t = 1)]
    seed1: u64,

    #[arg(long, default_value_t = 2)]
    seed2: u64,

    #[arg(long, default_value_t = 10)]
    trials: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::try_parse()?;

    let mut total = 0.0;
    for trial in 0..args.trials {
        let mut table = CuckooTable::with_seeds(
            args.size,
            args.seed1.wrapping_add(trial),
            args.seed2.wrapping_add(trial),
        )?;
        let mut prng = rand::rngs::SmallRng::seed_from_u64(trial);
        let mut seen = HashSet::new();
        loop {
            let key: u64 = prng.gen();
            if !seen.insert(key) {
                continue;
            }
            if !table.put(key, trial) {
                break;
            }
        }
        let load = table.len() as f64 / table.capacity() as f64;
        debug!(trial, entries = table.len(), load, "trial finished");
        total += load;
    }

    let mean = total / args.trials.max(1) as f64;
    info!(size = args.size, trials = args.trials, mean, "achievable load");
    println!("{:.3}", mean);

    Ok(())
}
