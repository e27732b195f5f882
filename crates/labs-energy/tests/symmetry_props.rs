use labs_core::Sequence;
use labs_energy::energy;
use proptest::prelude::*;

fn signs(length: std::ops::Range<usize>) -> impl Strategy<Value = Sequence> {
    prop::collection::vec(prop::bool::ANY, length).prop_map(|bits| {
        Sequence::from_signs(&bits.iter().map(|&b| if b { 1 } else { -1 }).collect::<Vec<i8>>())
    })
}

proptest! {
    #[test]
    fn energy_is_non_negative(sequence in signs(2..64)) {
        prop_assert!(energy(sequence.as_slice()) >= 0.0);
    }

    #[test]
    fn negation_preserves_energy(sequence in signs(1..64)) {
        prop_assert_eq!(energy(sequence.as_slice()), energy(sequence.negated().as_slice()));
    }

    #[test]
    fn reversal_preserves_energy(sequence in signs(1..64)) {
        prop_assert_eq!(energy(sequence.as_slice()), energy(sequence.reversed().as_slice()));
    }
}
