use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use labs_core::RngHandle;
use labs_search::{compare, Solver};
use tracing::info;

use super::{load_config, print_json};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Sequence length to search.
    #[arg(long)]
    pub length: usize,
    /// Runs per strategy.
    #[arg(long, default_value_t = 3)]
    pub trials: usize,
    /// Prefer the accelerated backend.
    #[arg(long)]
    pub accelerate: bool,
    /// Sampling seed; overrides the configuration file.
    #[arg(long)]
    pub seed: Option<u64>,
    /// YAML solver configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &CompareArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref(), args.seed)?;
    let mut rng = match config.seed {
        Some(seed) => RngHandle::from_seed(seed),
        None => RngHandle::from_entropy(),
    };
    let solver = Solver::new(config)?;
    info!(length = args.length, trials = args.trials, "comparing baseline and seeded strategies");
    let comparison = compare(&solver, args.length, args.accelerate, args.trials, &mut rng)?;
    print_json(&comparison)
}
