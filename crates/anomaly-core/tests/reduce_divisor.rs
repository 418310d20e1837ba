use anomaly_core::{solve, GenerateOpts};

#[test]
fn reference_solution_reduces_to_primitive_form() {
    let solution = solve(&[-1, 1], &[4, -2], &GenerateOpts::default()).unwrap();
    assert_eq!(solution.vector, vec![3, 3, 3, -12, -12, 15]);
    assert_eq!(solution.gcd, 3);
    assert_eq!(solution.simplified, vec![1, 1, 1, -4, -4, 5]);
}

#[test]
fn divisor_invariant_holds_elementwise() {
    let solution = solve(&[1], &[1, 2], &GenerateOpts::default()).unwrap();
    assert_eq!(solution.gcd, 2);
    for (simplified, original) in solution.simplified.iter().zip(&solution.vector) {
        assert_eq!(simplified * solution.gcd, *original);
    }
}

#[test]
fn gcd_is_sign_normalized() {
    let solution = solve(&[2], &[3], &GenerateOpts::default()).unwrap();
    assert!(solution.gcd > 0);
    assert_eq!(solution.gcd, 20);
}

#[test]
fn all_zero_solution_passes_through_unreduced() {
    let solution = solve(&[0], &[0, 0], &GenerateOpts::default()).unwrap();
    assert_eq!(solution.gcd, 0);
    assert_eq!(solution.simplified, solution.vector);
    assert!(solution.vector.iter().all(|&v| v == 0));
}

#[test]
fn solution_record_round_trips_through_json() {
    let solution = solve(&[-1, 1], &[4, -2], &GenerateOpts::default()).unwrap();
    let json = serde_json::to_string(&solution).unwrap();
    let restored: anomaly_core::Solution = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, solution);
}
