#![deny(missing_docs)]

//! LABS energy evaluation.
//!
//! `E(S) = Σ_{k=1}^{N-1} C_k²` with `C_k = Σ_{i=0}^{N-1-k} S[i]·S[i+k]`.
//! The single-sequence form is [`energy`]; the batch form [`energy_batch`]
//! scores every row of a [`Batch`] independently on the process-wide
//! preferred backend. Inputs are not validated: any `f32` values are scored
//! by the formula.

/// Backend capability trait and selection.
pub mod backend;
/// Scalar correlation kernels shared by every backend.
pub mod kernel;
#[cfg(feature = "parallel")]
mod parallel;
mod standard;

pub use backend::{accelerator_available, ArrayBackend, BackendKind};
pub use kernel::{batch_energies, correlation_profile, lag_correlation, merit_factor};
#[cfg(feature = "parallel")]
pub use parallel::ParallelBackend;
pub use standard::StandardBackend;

use labs_core::{Batch, Sequence};
use ndarray::ArrayView1;

/// Energy of a single sequence.
pub fn energy(sequence: &[f32]) -> f32 {
    kernel::row_energy(ArrayView1::from(sequence))
}

/// Energy of every row, evaluated on the accelerated backend when available.
pub fn energy_batch(batch: &Batch) -> Vec<f32> {
    energy_batch_with(backend::select(true), batch)
}

/// Energy of every row on an explicit backend.
pub fn energy_batch_with(backend: &dyn ArrayBackend, batch: &Batch) -> Vec<f32> {
    backend.energies(batch)
}

/// Energy of a single sequence routed through the batch path as a 1×N batch.
pub fn energy_accelerated(sequence: &[f32]) -> f32 {
    let batch = Batch::from_sequence(&Sequence::new(sequence.to_vec()));
    energy_batch(&batch).first().copied().unwrap_or(0.0)
}
