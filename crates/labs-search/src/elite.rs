use labs_energy::ArrayBackend;

/// Indices of the `elite_count` lowest energies, best first.
///
/// Ties keep batch order. Asking for more than the batch holds returns every
/// index.
pub fn select_elite(energies: &[f32], elite_count: usize, backend: &dyn ArrayBackend) -> Vec<usize> {
    let mut order = backend.argsort(energies);
    order.truncate(elite_count);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use labs_energy::backend;

    #[test]
    fn keeps_lowest_energies_in_order() {
        let energies = [9.0, 1.0, 5.0, 1.0, 0.0];
        let picked = select_elite(&energies, 3, backend::standard());
        assert_eq!(picked, vec![4, 1, 3]);
    }

    #[test]
    fn oversized_request_returns_everything() {
        let picked = select_elite(&[2.0, 1.0], 10, backend::standard());
        assert_eq!(picked, vec![1, 0]);
    }
}
