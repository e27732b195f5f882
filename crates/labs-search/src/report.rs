use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use labs_core::errors::{ErrorInfo, LabsError};
use labs_core::{RunProvenance, SchemaVersion, Sequence, SolverResult};
use labs_energy::BackendKind;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::solver::Strategy;

/// Schema version stamped on every [`SolveReport`].
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Detailed outcome of a solver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Schema version of this payload.
    pub schema_version: SchemaVersion,
    /// Strategy that produced the result.
    pub strategy: Strategy,
    /// Backend that sampled and scored the batch.
    pub backend: BackendKind,
    /// Sequence length searched.
    pub length: usize,
    /// Candidates drawn.
    pub batch_size: usize,
    /// Elite candidates handed to local search (zero for the baseline).
    pub elite_count: usize,
    /// Elapsed time and best energy.
    pub result: SolverResult,
    /// Merit factor `N² / (2E)` of the best sequence.
    pub merit_factor: Option<f64>,
    /// Sequence achieving `result.best_energy`.
    pub best_sequence: Option<Sequence>,
    /// SHA-256 of the best sequence's signs.
    pub sequence_digest: Option<String>,
    /// Lowest energy in the sampled batch before any local search.
    pub sampled_best_energy: Option<f64>,
    /// Elite candidates that went through local search.
    pub improved_elites: usize,
    /// Single-element flips accepted across all elites.
    pub accepted_flips: usize,
    /// Whether a cooperative deadline stopped local search early.
    pub timed_out: bool,
    /// Run provenance.
    pub provenance: RunProvenance,
}

impl SolveReport {
    /// Writes the report as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<(), LabsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| LabsError::io("report-mkdir", parent, &err))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            LabsError::Serde(ErrorInfo::new("report-serialize", err.to_string()).with_path(path))
        })?;
        fs::write(path, json).map_err(|err| LabsError::io("report-write", path, &err))
    }

    /// Reads a report previously written by [`SolveReport::write_json`].
    pub fn read_json(path: &Path) -> Result<Self, LabsError> {
        let bytes = fs::read(path).map_err(|err| LabsError::io("report-read", path, &err))?;
        serde_json::from_slice(&bytes).map_err(|err| {
            LabsError::Serde(ErrorInfo::new("report-parse", err.to_string()).with_path(path))
        })
    }
}

/// Hex SHA-256 digest of a sequence's signs, stable across float formatting.
pub fn sequence_digest(sequence: &Sequence) -> String {
    let signs: Vec<u8> = sequence
        .to_signs()
        .into_iter()
        .map(|sign| if sign < 0 { b'-' } else { b'+' })
        .collect();
    format!("{:x}", Sha256::digest(signs))
}

pub(crate) fn provenance(backend: BackendKind, seed: Option<u64>) -> RunProvenance {
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    RunProvenance {
        seed,
        backend: backend.name().to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
        tool_versions,
    }
}
