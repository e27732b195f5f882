use std::fmt;
use std::time::Instant;

use labs_core::errors::{ErrorInfo, LabsError};
use labs_core::{RngHandle, Sequence, SolverResult};
use labs_energy::{backend, merit_factor, ArrayBackend};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SolverConfig;
use crate::deadline::Deadline;
use crate::elite::select_elite;
use crate::local_search::{improve, Improvement};
use crate::report::{self, sequence_digest, SolveReport, REPORT_SCHEMA};

/// Timeout used when the caller does not pass one.
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Search strategy run by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Sample once and report the best sample.
    Baseline,
    /// Sample, keep the elite, hill-climb each elite member.
    Seeded,
}

impl Strategy {
    /// Maps the "seed with local search" flag to a strategy.
    pub fn from_flag(seed_with_local_search: bool) -> Self {
        if seed_with_local_search {
            Strategy::Seeded
        } else {
            Strategy::Baseline
        }
    }

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Baseline => "baseline",
            Strategy::Seeded => "seeded",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of a single solver invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Sequence length `N`.
    pub length: usize,
    /// Prefer the accelerated backend when it is available.
    pub use_accelerator: bool,
    /// Strategy to run.
    pub strategy: Strategy,
    /// Time budget in seconds, enforced only under a cooperative policy.
    pub timeout_secs: f64,
}

impl SolveRequest {
    /// Creates a request with the default timeout.
    pub fn new(length: usize, use_accelerator: bool, seed_with_local_search: bool) -> Self {
        Self {
            length,
            use_accelerator,
            strategy: Strategy::from_flag(seed_with_local_search),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Overrides the timeout.
    pub fn with_timeout(mut self, timeout_secs: f64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Random-sampling solver with an optional elite local-search stage.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

#[derive(Debug, Default)]
struct Outcome {
    best: Option<(Sequence, f32)>,
    sampled_best: Option<f32>,
    elite_count: usize,
    improved_elites: usize,
    accepted_flips: usize,
    timed_out: bool,
}

impl Solver {
    /// Creates a solver after validating the configuration.
    pub fn new(config: SolverConfig) -> Result<Self, LabsError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs the request, seeding from the configured seed or OS entropy.
    pub fn run(&self, request: &SolveRequest) -> Result<SolveReport, LabsError> {
        let mut rng = match self.config.seed {
            Some(seed) => RngHandle::from_seed(seed),
            None => RngHandle::from_entropy(),
        };
        let mut report = self.run_with_rng(request, &mut rng)?;
        report.provenance.seed = self.config.seed;
        Ok(report)
    }

    /// Runs the request drawing every random value from `rng`.
    pub fn run_with_rng(
        &self,
        request: &SolveRequest,
        rng: &mut RngHandle,
    ) -> Result<SolveReport, LabsError> {
        let start = Instant::now();
        if request.length == 0 {
            return Err(LabsError::Config(
                ErrorInfo::new("length-zero", "sequence length must be positive")
                    .with_context("length", request.length)
                    .with_hint("request a length of at least 1"),
            ));
        }

        let backend = backend::select(request.use_accelerator);
        let batch_size = self.config.batch_size(backend.is_accelerated());
        let deadline = Deadline::new(start, request.timeout_secs, self.config.timeout_policy);
        debug!(
            strategy = %request.strategy,
            backend = %backend.kind(),
            length = request.length,
            batch_size,
            "starting solve"
        );

        let outcome = match request.strategy {
            Strategy::Baseline => sample_baseline(backend, request.length, batch_size, rng),
            Strategy::Seeded => {
                self.sample_seeded(backend, request.length, batch_size, &deadline, rng)
            }
        };

        let time_taken = start.elapsed().as_secs_f64();
        let best_energy = outcome
            .best
            .as_ref()
            .map(|(_, energy)| f64::from(*energy))
            .unwrap_or(f64::INFINITY);
        info!(
            strategy = %request.strategy,
            backend = %backend.kind(),
            length = request.length,
            best_energy,
            time_taken,
            "solve finished"
        );

        let best_sequence = outcome.best.map(|(sequence, _)| sequence);
        Ok(SolveReport {
            schema_version: REPORT_SCHEMA,
            strategy: request.strategy,
            backend: backend.kind(),
            length: request.length,
            batch_size,
            elite_count: outcome.elite_count,
            result: SolverResult {
                time_taken,
                best_energy,
            },
            merit_factor: best_energy
                .is_finite()
                .then(|| merit_factor(request.length, best_energy)),
            sequence_digest: best_sequence.as_ref().map(sequence_digest),
            best_sequence,
            sampled_best_energy: outcome.sampled_best.map(f64::from),
            improved_elites: outcome.improved_elites,
            accepted_flips: outcome.accepted_flips,
            timed_out: outcome.timed_out,
            provenance: report::provenance(backend.kind(), None),
        })
    }

    fn sample_seeded(
        &self,
        backend: &dyn ArrayBackend,
        length: usize,
        batch_size: usize,
        deadline: &Deadline,
        rng: &mut RngHandle,
    ) -> Outcome {
        if batch_size == 0 {
            return Outcome::default();
        }
        let population = backend.sample_signs(batch_size, length, rng);
        let energies = backend.energies(&population);
        let elite_count = self.config.elite.count(batch_size);
        let elite_indices = select_elite(&energies, elite_count, backend);
        let elites = backend.to_host(&backend.gather(&population, &elite_indices));
        debug!(elite_count = elites.len(), "selected elite candidates");

        let mut outcome = Outcome {
            sampled_best: backend.min(&energies),
            elite_count: elites.len(),
            ..Outcome::default()
        };
        let mut best: Option<Improvement> = None;
        for (rank, candidate) in elites.iter().enumerate() {
            let improvement = improve(candidate, self.config.max_flip_rounds);
            outcome.improved_elites += 1;
            outcome.accepted_flips += improvement.accepted_flips;
            if best
                .as_ref()
                .map_or(true, |current| improvement.energy < current.energy)
            {
                best = Some(improvement);
            }
            if rank + 1 < elites.len() && deadline.expired() {
                warn!(
                    improved = outcome.improved_elites,
                    remaining = elites.len() - rank - 1,
                    "deadline reached, skipping remaining elite candidates"
                );
                outcome.timed_out = true;
                break;
            }
        }
        outcome.best = best.map(|improvement| (improvement.sequence, improvement.energy));
        outcome
    }
}

fn sample_baseline(
    backend: &dyn ArrayBackend,
    length: usize,
    batch_size: usize,
    rng: &mut RngHandle,
) -> Outcome {
    if batch_size == 0 {
        return Outcome::default();
    }
    let population = backend.sample_signs(batch_size, length, rng);
    let energies = backend.energies(&population);
    let sampled_best = backend.min(&energies);
    let best = sampled_best.and_then(|minimum| {
        energies
            .iter()
            .position(|&energy| energy == minimum)
            .map(|index| (population.sequence(index), minimum))
    });
    Outcome {
        best,
        sampled_best,
        ..Outcome::default()
    }
}

/// Runs one solver invocation with fresh entropy and default configuration.
///
/// `timeout` is accepted for interface compatibility and not enforced; use a
/// [`Solver`] with [`crate::TimeoutPolicy::Cooperative`] for a real deadline.
/// A zero length evaluates nothing and reports `+∞`.
pub fn solve(
    length: usize,
    use_accelerator: bool,
    seed_with_local_search: bool,
    timeout: f64,
) -> SolverResult {
    let start = Instant::now();
    let request = SolveRequest::new(length, use_accelerator, seed_with_local_search)
        .with_timeout(timeout);
    match Solver::default().run(&request) {
        Ok(report) => report.result,
        Err(err) => {
            warn!(%err, "solve request rejected");
            SolverResult::empty(start.elapsed().as_secs_f64())
        }
    }
}
