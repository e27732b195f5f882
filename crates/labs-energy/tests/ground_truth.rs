use labs_energy::energy;

#[test]
fn known_sequence_n3() {
    // C_1 = 1 - 1 = 0, C_2 = -1, E = 1
    assert_eq!(energy(&[1.0, 1.0, -1.0]), 1.0);
}

#[test]
fn all_ones_n4() {
    // C_1 = 3, C_2 = 2, C_3 = 1
    assert_eq!(energy(&[1.0, 1.0, 1.0, 1.0]), 14.0);
}

#[test]
fn alternating_n4() {
    // C_1 = -3, C_2 = 2, C_3 = -1
    assert_eq!(energy(&[1.0, -1.0, 1.0, -1.0]), 14.0);
}

#[test]
fn single_element_has_zero_energy() {
    assert_eq!(energy(&[1.0]), 0.0);
    assert_eq!(energy(&[]), 0.0);
}

#[test]
fn barker_13_reaches_its_known_optimum() {
    let barker: [f32; 13] = [1., 1., 1., 1., 1., -1., -1., 1., 1., -1., 1., -1., 1.];
    assert_eq!(energy(&barker), 6.0);
}

#[test]
fn non_binary_values_follow_the_formula() {
    // C_1 = 2*3 = 6, E = 36
    assert_eq!(energy(&[2.0, 3.0]), 36.0);
}
