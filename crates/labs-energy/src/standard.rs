use labs_core::{Batch, RngHandle};
use ndarray::Array2;
use rand::Rng;

use crate::backend::{ascending, ArrayBackend, BackendKind};
use crate::kernel::batch_energies;

/// Sequential backend scoring the whole batch with one pass per lag on the
/// caller's thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBackend;

impl ArrayBackend for StandardBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Standard
    }

    fn sample_signs(&self, rows: usize, cols: usize, rng: &mut RngHandle) -> Batch {
        Batch::from_array(Array2::from_shape_simple_fn((rows, cols), || {
            if rng.gen::<bool>() {
                1.0
            } else {
                -1.0
            }
        }))
    }

    fn energies(&self, batch: &Batch) -> Vec<f32> {
        batch_energies(batch.view()).to_vec()
    }

    fn min(&self, values: &[f32]) -> Option<f32> {
        values
            .iter()
            .copied()
            .filter(|value| !value.is_nan())
            .reduce(f32::min)
    }

    fn argsort(&self, values: &[f32]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&left, &right| ascending(values, left, right));
        order
    }
}
