//! Array backend capability interface and one-time backend selection.

use std::fmt;
use std::sync::OnceLock;

use labs_core::errors::{ErrorInfo, LabsError};
use labs_core::{Batch, RngHandle, Sequence};
use ndarray::Axis;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::standard::StandardBackend;

/// Environment variable that forces the standard backend when set.
pub const DISABLE_ACCELERATOR_ENV: &str = "LABS_DISABLE_ACCELERATOR";

/// Available backend implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Sequential evaluation on the calling thread.
    Standard,
    /// Data-parallel evaluation across the batch dimension.
    Parallel,
}

impl BackendKind {
    /// Human readable backend name.
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Standard => "standard",
            BackendKind::Parallel => "parallel",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Operations the solver needs from an array library.
///
/// Both implementations expose the same functional surface; callers pick one
/// through [`select`] and never inspect which one they hold.
pub trait ArrayBackend: Send + Sync + fmt::Debug {
    /// Identifies the implementation.
    fn kind(&self) -> BackendKind;

    /// Whether this backend counts as the accelerated device.
    fn is_accelerated(&self) -> bool {
        self.kind() == BackendKind::Parallel
    }

    /// Draws a `rows × cols` batch of uniform ±1 entries.
    fn sample_signs(&self, rows: usize, cols: usize, rng: &mut RngHandle) -> Batch;

    /// LABS energy of every row, in row order.
    fn energies(&self, batch: &Batch) -> Vec<f32>;

    /// Smallest value, or `None` for an empty slice. NaN entries are skipped.
    fn min(&self, values: &[f32]) -> Option<f32>;

    /// Indices that sort `values` ascending. Ties keep their original order
    /// and NaN entries sort last.
    fn argsort(&self, values: &[f32]) -> Vec<usize>;

    /// Copies the listed rows into a new batch, in the listed order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    fn gather(&self, batch: &Batch, indices: &[usize]) -> Batch {
        Batch::from_array(batch.as_array().select(Axis(0), indices))
    }

    /// Materializes a batch as host-side sequences.
    fn to_host(&self, batch: &Batch) -> Vec<Sequence> {
        batch
            .iter_rows()
            .map(|row| Sequence::new(row.to_vec()))
            .collect()
    }
}

pub(crate) fn ascending(values: &[f32], left: usize, right: usize) -> std::cmp::Ordering {
    let (a, b) = (values[left], values[right]);
    match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal),
    }
}

static STANDARD: StandardBackend = StandardBackend;

#[cfg(feature = "parallel")]
static PARALLEL: crate::parallel::ParallelBackend = crate::parallel::ParallelBackend;

static ACCELERATOR: OnceLock<bool> = OnceLock::new();

/// Whether the accelerated backend can be used in this process.
///
/// The probe runs once; later changes to the environment are not observed.
pub fn accelerator_available() -> bool {
    *ACCELERATOR.get_or_init(probe_accelerator)
}

fn probe_accelerator() -> bool {
    if std::env::var_os(DISABLE_ACCELERATOR_ENV).is_some() {
        debug!(env = DISABLE_ACCELERATOR_ENV, "accelerator disabled by environment");
        return false;
    }
    #[cfg(feature = "parallel")]
    {
        let threads = rayon::current_num_threads();
        debug!(threads, "probed parallel backend");
        threads >= 2
    }
    #[cfg(not(feature = "parallel"))]
    {
        debug!("parallel feature not compiled in");
        false
    }
}

/// Returns the standard backend.
pub fn standard() -> &'static dyn ArrayBackend {
    &STANDARD
}

/// Picks the backend for a call: parallel when requested and available,
/// standard otherwise.
pub fn select(prefer_accelerated: bool) -> &'static dyn ArrayBackend {
    if prefer_accelerated {
        if let Some(backend) = accelerated() {
            return backend;
        }
        debug!("accelerator requested but unavailable, using standard backend");
    }
    standard()
}

/// Returns the accelerated backend if it passed the availability probe.
pub fn accelerated() -> Option<&'static dyn ArrayBackend> {
    if !accelerator_available() {
        return None;
    }
    #[cfg(feature = "parallel")]
    {
        Some(&PARALLEL)
    }
    #[cfg(not(feature = "parallel"))]
    {
        None
    }
}

/// Looks up a backend by kind, failing when it is not available.
pub fn by_kind(kind: BackendKind) -> Result<&'static dyn ArrayBackend, LabsError> {
    match kind {
        BackendKind::Standard => Ok(standard()),
        BackendKind::Parallel => accelerated().ok_or_else(|| {
            LabsError::Backend(
                ErrorInfo::new("backend-unavailable", "parallel backend is not available")
                    .with_context("backend", kind)
                    .with_hint(format!(
                        "build with the `parallel` feature, run with two or more threads and unset {DISABLE_ACCELERATOR_ENV}"
                    )),
            )
        }),
    }
}
