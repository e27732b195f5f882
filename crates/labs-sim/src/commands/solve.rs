use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use labs_search::{SolveRequest, Solver, TimeoutPolicy, DEFAULT_TIMEOUT_SECS};
use tracing::info;

use super::{load_config, print_json};

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Sequence length to search.
    #[arg(long)]
    pub length: usize,
    /// Prefer the accelerated backend.
    #[arg(long)]
    pub accelerate: bool,
    /// Hill-climb the elite of the sampled batch.
    #[arg(long)]
    pub seeded: bool,
    /// Time budget in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,
    /// Stop local search once the timeout passes.
    #[arg(long)]
    pub enforce_timeout: bool,
    /// Sampling seed; overrides the configuration file.
    #[arg(long)]
    pub seed: Option<u64>,
    /// YAML solver configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Directory receiving `summary.json` and `config.yaml`.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &SolveArgs) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(args.config.as_deref(), args.seed)?;
    if args.enforce_timeout {
        config.timeout_policy = TimeoutPolicy::Cooperative;
    }
    let solver = Solver::new(config)?;
    let request =
        SolveRequest::new(args.length, args.accelerate, args.seeded).with_timeout(args.timeout);
    let report = solver.run(&request)?;

    if let Some(out) = &args.out {
        fs::create_dir_all(out)?;
        let summary = out.join("summary.json");
        report.write_json(&summary)?;
        fs::write(out.join("config.yaml"), solver.config().to_yaml_string()?)?;
        info!(path = %summary.display(), "wrote solve summary");
    }
    print_json(&report)
}
