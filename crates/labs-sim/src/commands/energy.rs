use std::error::Error;

use clap::Args;
use labs_core::Sequence;
use labs_energy::{backend, correlation_profile, merit_factor};
use serde::Serialize;
use tracing::debug;

use super::print_json;

#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Comma separated elements, e.g. `1,1,-1`.
    #[arg(long, allow_hyphen_values = true)]
    pub sequence: String,
    /// Route the evaluation through the accelerated batch path when available.
    #[arg(long)]
    pub accelerate: bool,
}

#[derive(Debug, Serialize)]
struct EnergyReport {
    backend: String,
    length: usize,
    energy: f32,
    merit_factor: f64,
    correlations: Vec<f32>,
    binary: bool,
}

pub fn run(args: &EnergyArgs) -> Result<(), Box<dyn Error>> {
    let sequence: Sequence = args.sequence.parse()?;
    let backend = if args.accelerate {
        backend::select(true)
    } else {
        backend::standard()
    };
    debug!(backend = %backend.kind(), length = sequence.len(), "scoring sequence");
    let energy = if args.accelerate {
        labs_energy::energy_accelerated(sequence.as_slice())
    } else {
        labs_energy::energy(sequence.as_slice())
    };
    print_json(&EnergyReport {
        backend: backend.kind().to_string(),
        length: sequence.len(),
        energy,
        merit_factor: merit_factor(sequence.len(), f64::from(energy)),
        correlations: correlation_profile(sequence.as_slice()),
        binary: sequence.is_binary(),
    })
}
