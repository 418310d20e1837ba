use serde::{Deserialize, Serialize};

use crate::errors::{AnomalyError, ErrorInfo};

fn default_sort() -> bool {
    true
}

fn shape_error(code: &str, message: impl Into<String>, l_len: usize, k_len: usize) -> AnomalyError {
    AnomalyError::Shape(
        ErrorInfo::new(code, message)
            .with_context("l_len", l_len.to_string())
            .with_context("k_len", k_len.to_string()),
    )
}

fn overflow_error(op: &str) -> AnomalyError {
    AnomalyError::Numeric(
        ErrorInfo::new("i128-overflow", "intermediate value exceeded the i128 range")
            .with_context("op", op)
            .with_hint("reduce the magnitude of the input sequences"),
    )
}

/// Options controlling the ordering of the generated solution vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateOpts {
    /// Reorder the output by ascending absolute value.
    #[serde(default = "default_sort")]
    pub sort: bool,
    /// Flip the sort direction to descending absolute value.
    #[serde(default)]
    pub descending: bool,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            descending: false,
        }
    }
}

fn checked_mul(a: i128, b: i128) -> Result<i128, AnomalyError> {
    a.checked_mul(b).ok_or_else(|| overflow_error("mul"))
}

fn checked_add(a: i128, b: i128) -> Result<i128, AnomalyError> {
    a.checked_add(b).ok_or_else(|| overflow_error("add"))
}

fn checked_sub(a: i128, b: i128) -> Result<i128, AnomalyError> {
    a.checked_sub(b).ok_or_else(|| overflow_error("sub"))
}

fn neg(seq: &[i64]) -> impl Iterator<Item = i128> + '_ {
    seq.iter().map(|&v| -(v as i128))
}

/// Expands `l` and `k` into the intermediate vectors `x` and `y`.
///
/// Both concatenation patterns satisfy sum(x) = 0 and sum(y) = 0, which is
/// what makes the bilinear combination below an exact solution.
fn expand(l: &[i64], k: &[i64]) -> (Vec<i128>, Vec<i128>) {
    if l.len() == k.len() {
        let mut x = Vec::with_capacity(2 * k.len() + 2);
        x.push(l[0] as i128);
        x.extend(k.iter().map(|&v| v as i128));
        x.push(-(l[0] as i128));
        x.extend(neg(k));

        let mut y = Vec::with_capacity(2 * l.len() + 2);
        y.push(0);
        y.push(0);
        y.extend(l.iter().map(|&v| v as i128));
        y.extend(neg(l));
        (x, y)
    } else {
        let mut x = Vec::with_capacity(2 * k.len() + 1);
        x.push(0);
        x.extend(k.iter().map(|&v| v as i128));
        x.extend(neg(k));

        let mut y = Vec::with_capacity(2 * l.len() + 3);
        y.extend(l.iter().map(|&v| v as i128));
        y.push(k[0] as i128);
        y.push(0);
        y.extend(neg(l));
        y.push(-(k[0] as i128));
        (x, y)
    }
}

/// Generates an integer vector `zz` satisfying sum(zz) = 0 and sum(zz³) = 0.
///
/// Implements the parametrization of arXiv:1905.13729: the inputs are
/// expanded into vectors `x` and `y`, and the output is the bilinear
/// combination `(Σ x·y²)·x − (Σ x²·y)·y`. The two constraints hold by
/// algebraic construction and are not re-verified here.
///
/// `l` and `k` must be non-empty and either equally long or with `k`
/// exactly one element longer; anything else is a [`AnomalyError::Shape`]
/// error. Arithmetic is checked i128 throughout, so oversized inputs fail
/// with [`AnomalyError::Numeric`] instead of wrapping.
pub fn generate(l: &[i64], k: &[i64], opts: &GenerateOpts) -> Result<Vec<i128>, AnomalyError> {
    if l.is_empty() || k.is_empty() {
        return Err(shape_error(
            "empty-sequence",
            "both input sequences must be non-empty",
            l.len(),
            k.len(),
        ));
    }
    if l.len() != k.len() && k.len() != l.len() + 1 {
        return Err(shape_error(
            "length-mismatch",
            "sequence lengths must be equal, or k exactly one element longer",
            l.len(),
            k.len(),
        ));
    }

    let (x, y) = expand(l, k);

    let mut a: i128 = 0;
    let mut b: i128 = 0;
    for (&xi, &yi) in x.iter().zip(&y) {
        a = checked_add(a, checked_mul(xi, checked_mul(yi, yi)?)?)?;
        b = checked_add(b, checked_mul(yi, checked_mul(xi, xi)?)?)?;
    }

    let mut zz = Vec::with_capacity(x.len());
    for (&xi, &yi) in x.iter().zip(&y) {
        zz.push(checked_sub(checked_mul(a, xi)?, checked_mul(b, yi)?)?);
    }

    if opts.sort {
        if opts.descending {
            zz.sort_by(|lhs, rhs| rhs.unsigned_abs().cmp(&lhs.unsigned_abs()));
        } else {
            zz.sort_by_key(|value| value.unsigned_abs());
        }
    }
    Ok(zz)
}
