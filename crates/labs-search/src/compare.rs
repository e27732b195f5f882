use labs_core::errors::LabsError;
use labs_core::RngHandle;
use serde::{Deserialize, Serialize};

use crate::solver::{SolveRequest, Solver, Strategy};

/// Aggregate over repeated runs of one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    /// Strategy summarised.
    pub strategy: Strategy,
    /// Number of runs.
    pub trials: usize,
    /// Mean of the per-run best energies.
    pub mean_best_energy: f64,
    /// Lowest best energy over all runs.
    pub min_best_energy: f64,
    /// Mean wall-clock seconds per run.
    pub mean_time_taken: f64,
}

/// Baseline and seeded strategies run side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Sequence length searched.
    pub length: usize,
    /// Pure random-sampling summary.
    pub baseline: StrategySummary,
    /// Elite local-search summary.
    pub seeded: StrategySummary,
}

/// Runs both strategies `trials` times, alternating between them.
pub fn compare(
    solver: &Solver,
    length: usize,
    use_accelerator: bool,
    trials: usize,
    rng: &mut RngHandle,
) -> Result<Comparison, LabsError> {
    let mut baseline = Vec::with_capacity(trials);
    let mut seeded = Vec::with_capacity(trials);
    for _ in 0..trials {
        let request = SolveRequest::new(length, use_accelerator, false);
        baseline.push(solver.run_with_rng(&request, rng)?.result);
        let request = SolveRequest::new(length, use_accelerator, true);
        seeded.push(solver.run_with_rng(&request, rng)?.result);
    }
    Ok(Comparison {
        length,
        baseline: summarise(Strategy::Baseline, &baseline),
        seeded: summarise(Strategy::Seeded, &seeded),
    })
}

fn summarise(strategy: Strategy, results: &[labs_core::SolverResult]) -> StrategySummary {
    let trials = results.len();
    let denominator = trials.max(1) as f64;
    StrategySummary {
        strategy,
        trials,
        mean_best_energy: results.iter().map(|r| r.best_energy).sum::<f64>() / denominator,
        min_best_energy: results
            .iter()
            .map(|r| r.best_energy)
            .fold(f64::INFINITY, f64::min),
        mean_time_taken: results.iter().map(|r| r.time_taken).sum::<f64>() / denominator,
    }
}
