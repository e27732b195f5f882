use labs_core::Sequence;
use labs_energy::energy;
use labs_search::{improve, improve_with, DEFAULT_MAX_FLIP_ROUNDS};
use proptest::prelude::*;

fn signs(length: std::ops::Range<usize>) -> impl Strategy<Value = Sequence> {
    prop::collection::vec(prop::bool::ANY, length).prop_map(|bits| {
        Sequence::from_signs(&bits.iter().map(|&b| if b { 1 } else { -1 }).collect::<Vec<i8>>())
    })
}

proptest! {
    #[test]
    fn never_worsens_and_reports_true_energy(start in signs(1..24)) {
        let result = improve(&start, DEFAULT_MAX_FLIP_ROUNDS);
        prop_assert!(result.energy <= energy(start.as_slice()));
        prop_assert_eq!(result.energy, energy(result.sequence.as_slice()));
        prop_assert!(result.sequence.is_binary());
        prop_assert!(result.accepted_flips <= DEFAULT_MAX_FLIP_ROUNDS);
    }

    #[test]
    fn idempotent_at_a_local_optimum(start in signs(2..20)) {
        // Every accepted flip lowers an integer energy, so a generous budget converges.
        let converged = improve(&start, 10_000);
        prop_assert!(converged.rounds < 10_000);
        let again = improve(&converged.sequence, DEFAULT_MAX_FLIP_ROUNDS);
        prop_assert_eq!(again.accepted_flips, 0);
        prop_assert_eq!(again.energy, converged.energy);
        prop_assert_eq!(again.sequence, converged.sequence);
    }

    #[test]
    fn trajectory_is_deterministic(start in signs(1..24)) {
        prop_assert_eq!(improve(&start, 3), improve(&start, 3));
    }
}

#[test]
fn caller_sequence_is_untouched() {
    let start = Sequence::from_signs(&[1, 1, 1, 1, 1]);
    let snapshot = start.clone();
    let result = improve(&start, 3);
    assert_eq!(start, snapshot);
    assert!(result.energy < energy(start.as_slice()));
}

#[test]
fn each_round_accepts_at_most_one_flip() {
    let start = Sequence::from_signs(&[1; 12]);
    let result = improve(&start, 2);
    assert_eq!(result.rounds, 2);
    assert_eq!(result.accepted_flips, 2);
}

#[test]
fn custom_energy_drives_the_scan() {
    // Counts +1 entries: every flip of a +1 improves, so index order decides.
    let count_positive = |values: &[f32]| values.iter().filter(|&&v| v > 0.0).count() as f32;
    let start = Sequence::from_signs(&[-1, 1, 1, -1]);
    let result = improve_with(&start, 5, count_positive);
    assert_eq!(result.sequence, Sequence::from_signs(&[-1, -1, -1, -1]));
    assert_eq!(result.energy, 0.0);
    assert_eq!(result.accepted_flips, 2);
    assert_eq!(result.rounds, 3);
}
