use ndarray::{s, Array1, ArrayView1, ArrayView2, Axis};

/// Lag-`k` autocorrelation `C_k = Σ s[i]·s[i+k]`.
///
/// Lags at or beyond the row length contribute nothing and return zero.
pub fn lag_correlation(row: &[f32], lag: usize) -> f32 {
    let n = row.len();
    if lag >= n {
        return 0.0;
    }
    let row = ArrayView1::from(row);
    row.slice(s![..n - lag]).dot(&row.slice(s![lag..]))
}

/// Energy of every row of `batch`.
///
/// For each lag the shifted column slices are multiplied elementwise and
/// summed along the row axis, giving `C_k` for all rows at once. Squares
/// accumulate in `f32`.
pub fn batch_energies(batch: ArrayView2<'_, f32>) -> Array1<f32> {
    let n = batch.ncols();
    let mut energies = Array1::zeros(batch.nrows());
    for lag in 1..n {
        let correlations =
            (&batch.slice(s![.., ..n - lag]) * &batch.slice(s![.., lag..])).sum_axis(Axis(1));
        energies += &correlations.mapv(|c| c * c);
    }
    energies
}

/// Energy of one row, evaluated as a 1×N batch.
pub fn row_energy(row: ArrayView1<'_, f32>) -> f32 {
    batch_energies(row.insert_axis(Axis(0)))
        .iter()
        .next()
        .copied()
        .unwrap_or(0.0)
}

/// All off-peak autocorrelations `C_1..C_{N-1}` in lag order.
pub fn correlation_profile(row: &[f32]) -> Vec<f32> {
    (1..row.len()).map(|lag| lag_correlation(row, lag)).collect()
}

/// Merit factor `N² / (2E)`; infinite when the energy is zero.
pub fn merit_factor(length: usize, energy: f64) -> f64 {
    if energy <= 0.0 {
        return f64::INFINITY;
    }
    let n = length as f64;
    n * n / (2.0 * energy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lag_beyond_length_is_zero() {
        assert_eq!(lag_correlation(&[1.0, -1.0], 2), 0.0);
        assert_eq!(lag_correlation(&[], 1), 0.0);
    }

    #[test]
    fn profile_matches_hand_computation() {
        assert_eq!(correlation_profile(&[1.0, -1.0, 1.0, -1.0]), vec![-3.0, 2.0, -1.0]);
    }

    #[test]
    fn batch_energies_score_rows_independently() {
        let batch = ndarray::array![[1.0f32, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]];
        assert_eq!(batch_energies(batch.view()).to_vec(), vec![1.0, 5.0, 5.0]);
    }

    #[test]
    fn short_rows_have_zero_energy() {
        assert_eq!(batch_energies(ndarray::Array2::<f32>::zeros((3, 1)).view()).to_vec(), vec![0.0; 3]);
        assert!(batch_energies(ndarray::Array2::<f32>::zeros((0, 5)).view()).is_empty());
        assert_eq!(row_energy(ArrayView1::from(&[1.0f32][..])), 0.0);
    }

    #[test]
    fn merit_factor_of_barker_3() {
        assert_eq!(merit_factor(3, 1.0), 4.5);
        assert!(merit_factor(1, 0.0).is_infinite());
    }
}
