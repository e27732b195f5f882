use labs_core::{derive_substream_seed, Batch, RngHandle};
use ndarray::Axis;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

use crate::backend::{ascending, ArrayBackend, BackendKind};
use crate::kernel::row_energy;

/// Rayon backend splitting the row axis across the global thread pool.
///
/// Sampling draws a single master seed from the caller's RNG and derives one
/// substream per row, so output is independent of the pool size.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelBackend;

impl ArrayBackend for ParallelBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Parallel
    }

    fn sample_signs(&self, rows: usize, cols: usize, rng: &mut RngHandle) -> Batch {
        let master = rng.next_u64();
        let mut batch = Batch::zeros(rows, cols);
        batch
            .as_array_mut()
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(index, mut row)| {
                let mut row_rng = StdRng::seed_from_u64(derive_substream_seed(master, index as u64));
                row.map_inplace(|value| *value = if row_rng.gen::<bool>() { 1.0 } else { -1.0 });
            });
        batch
    }

    fn energies(&self, batch: &Batch) -> Vec<f32> {
        batch
            .as_array()
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(row_energy)
            .collect()
    }

    fn min(&self, values: &[f32]) -> Option<f32> {
        values
            .par_iter()
            .copied()
            .filter(|value| !value.is_nan())
            .reduce_with(f32::min)
    }

    fn argsort(&self, values: &[f32]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.par_sort_by(|&left, &right| ascending(values, left, right));
        order
    }
}
