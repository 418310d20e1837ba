use anomaly_core::{generate, GenerateOpts};

fn unsorted() -> GenerateOpts {
    GenerateOpts {
        sort: false,
        descending: false,
    }
}

#[test]
fn equal_length_pair() {
    // l = [2], k = [3] expands to x = [2, 3, -2, -3], y = [0, 0, 2, -2].
    let zz = generate(&[2], &[3], &unsorted()).unwrap();
    assert_eq!(zz, vec![-40, -60, 60, 40]);
    assert_eq!(zz.iter().sum::<i128>(), 0);
    assert_eq!(zz.iter().map(|v| v * v * v).sum::<i128>(), 0);
}

#[test]
fn k_one_longer_pair() {
    // l = [1], k = [1, 2] expands to x = [0, 1, 2, -1, -2], y = [1, 1, 0, -1, -1].
    let zz = generate(&[1], &[1, 2], &unsorted()).unwrap();
    assert_eq!(zz, vec![4, 2, -4, -2, 0]);
    assert_eq!(zz.iter().sum::<i128>(), 0);
    assert_eq!(zz.iter().map(|v| v * v * v).sum::<i128>(), 0);
}

#[test]
fn reference_solution() {
    let zz = generate(&[-1, 1], &[4, -2], &GenerateOpts::default()).unwrap();
    assert_eq!(zz, vec![3, 3, 3, -12, -12, 15]);
}

#[test]
fn ascending_sort_is_stable_on_ties() {
    // Raw order is [4, 2, -4, -2, 0]; equal magnitudes keep that order.
    let zz = generate(&[1], &[1, 2], &GenerateOpts::default()).unwrap();
    assert_eq!(zz, vec![0, 2, -2, 4, -4]);
}

#[test]
fn descending_sort_is_stable_on_ties() {
    // Raw order is [-40, -60, 60, 40].
    let opts = GenerateOpts {
        sort: true,
        descending: true,
    };
    let zz = generate(&[2], &[3], &opts).unwrap();
    assert_eq!(zz, vec![-60, 60, -40, 40]);
}

#[test]
fn unsorted_output_is_deterministic() {
    let first = generate(&[2, -1, 3], &[0, 1, -2], &unsorted()).unwrap();
    let second = generate(&[2, -1, 3], &[0, 1, -2], &unsorted()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sorted_output_is_nondecreasing_in_magnitude() {
    let zz = generate(&[1, 1], &[1, -2], &GenerateOpts::default()).unwrap();
    for pair in zz.windows(2) {
        assert!(pair[0].unsigned_abs() <= pair[1].unsigned_abs());
    }
}

#[test]
fn descending_output_is_nonincreasing_in_magnitude() {
    let opts = GenerateOpts {
        sort: true,
        descending: true,
    };
    let zz = generate(&[1, 1], &[1, -2], &opts).unwrap();
    for pair in zz.windows(2) {
        assert!(pair[0].unsigned_abs() >= pair[1].unsigned_abs());
    }
}
