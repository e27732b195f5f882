#![deny(missing_docs)]

//! Random sampling and elite local search for low autocorrelation binary
//! sequences.
//!
//! The baseline strategy samples a batch of ±1 sequences and reports the
//! lowest energy. The seeded strategy keeps the lowest-energy elite of that
//! batch and hill-climbs each member with single-element flips before
//! reporting the best result.

/// Side-by-side strategy comparison.
pub mod compare;
/// YAML configuration schema and defaults.
pub mod config;
/// Cooperative wall-clock deadline.
pub mod deadline;
/// Elite subset selection.
pub mod elite;
/// Greedy single-flip hill-climbing.
pub mod local_search;
/// Solver reports and digests.
pub mod report;
/// Solver entry points.
pub mod solver;

pub use compare::{compare, Comparison, StrategySummary};
pub use config::{
    EliteConfig, SolverConfig, TimeoutPolicy, ACCELERATED_BATCH_SIZE, DEFAULT_MAX_FLIP_ROUNDS,
    STANDARD_BATCH_SIZE,
};
pub use elite::select_elite;
pub use local_search::{improve, improve_with, Improvement};
pub use report::{sequence_digest, SolveReport};
pub use solver::{solve, SolveRequest, Solver, Strategy, DEFAULT_TIMEOUT_SECS};
