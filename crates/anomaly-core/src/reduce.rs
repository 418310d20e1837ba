use serde::{Deserialize, Serialize};

use crate::errors::AnomalyError;
use crate::generate::{generate, GenerateOpts};

/// An anomaly-free solution together with its gcd-reduced form.
///
/// Immutable record returned per call; `simplified[i] * gcd == vector[i]`
/// holds for every index whenever `gcd != 0`. When the solution vector is
/// all zeros (degenerate all-zero inputs) `gcd` is 0 and `simplified` is a
/// verbatim copy of `vector`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Solution {
    /// The unreduced solution vector.
    pub vector: Vec<i128>,
    /// Greatest common divisor of the vector elements, non-negative.
    pub gcd: i128,
    /// The vector divided elementwise by `gcd`, a primitive solution.
    pub simplified: Vec<i128>,
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Reduces a sequence to the greatest common divisor of its elements.
///
/// Returns 0 for an empty or all-zero sequence; the result is always
/// non-negative regardless of element signs.
pub fn gcd_reduce(values: &[i128]) -> i128 {
    let mut acc: u128 = 0;
    for value in values {
        acc = gcd_u128(acc, value.unsigned_abs());
        if acc == 1 {
            break;
        }
    }
    acc as i128
}

/// Generates a solution vector and its gcd-reduced form in one step.
///
/// Delegates to [`generate`] with identical arguments, then attaches the
/// divisor and the simplified (primitive) vector. Failures are exactly
/// those of [`generate`]; the reduction itself cannot fail.
pub fn solve(l: &[i64], k: &[i64], opts: &GenerateOpts) -> Result<Solution, AnomalyError> {
    let vector = generate(l, k, opts)?;
    let gcd = gcd_reduce(&vector);
    let simplified = if gcd == 0 {
        vector.clone()
    } else {
        vector.iter().map(|value| value / gcd).collect()
    };
    Ok(Solution {
        vector,
        gcd,
        simplified,
    })
}
