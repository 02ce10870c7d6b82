//! B-spline basis functions via the Cox–de Boor recursion (NURBS book eq. 2.5).

use std::collections::HashMap;

use knotwork_core::error::check_index;
use knotwork_core::Result;

use super::knot::knot_span_for;

/// Value of the `i`-th basis function of degree `p` at `u`.
///
/// Coefficients with a zero denominator (repeated knots) produce NaN, which is
/// taken as zero for each of the two terms before they are summed.
///
/// # Arguments
/// * `knots` - Knot vector
/// * `p` - Degree
/// * `i` - Basis function index, `i < knots.len()`
/// * `u` - Curve parameter
pub fn basis(knots: &[f64], p: usize, i: usize, u: f64) -> f64 {
    debug_assert!(i < knots.len(), "basis index {} out of range for {} knots", i, knots.len());

    if p == 0 {
        return step(knots, i, u);
    }

    let left = left_term(knots, p, i, u, basis(knots, p - 1, i, u));
    let right = right_term(knots, p, i, u, basis(knots, p - 1, i + 1, u));
    left + right
}

/// Checked form of [`basis`].
pub fn try_basis(knots: &[f64], p: usize, i: usize, u: f64) -> Result<f64> {
    // The recursion reads knots up to i + p + 1.
    check_index(i + p + 1, knots.len())?;
    Ok(basis(knots, p, i, u))
}

/// Same result as [`basis`], sharing the `(i, p)` sub-results of one evaluation.
///
/// The naive recursion visits `N_{j,q}` many times over; here each pair is
/// computed once. The arithmetic is unchanged, so results are bit-identical.
pub fn basis_memoized(knots: &[f64], p: usize, i: usize, u: f64) -> f64 {
    debug_assert!(i < knots.len(), "basis index {} out of range for {} knots", i, knots.len());
    let mut memo = HashMap::with_capacity((p + 1) * (p + 2) / 2);
    basis_cached(knots, p, i, u, &mut memo)
}

fn basis_cached(
    knots: &[f64],
    p: usize,
    i: usize,
    u: f64,
    memo: &mut HashMap<(usize, usize), f64>,
) -> f64 {
    if let Some(&value) = memo.get(&(i, p)) {
        return value;
    }

    let value = if p == 0 {
        step(knots, i, u)
    } else {
        let lower_left = basis_cached(knots, p - 1, i, u, memo);
        let lower_right = basis_cached(knots, p - 1, i + 1, u, memo);
        left_term(knots, p, i, u, lower_left) + right_term(knots, p, i, u, lower_right)
    };

    memo.insert((i, p), value);
    value
}

/// `N_{i,0}`: one on the half-open span `[k_i, k_{i+1})`.
fn step(knots: &[f64], i: usize, u: f64) -> f64 {
    if knots[i] <= u && u < knots[i + 1] {
        1.0
    } else {
        0.0
    }
}

fn left_term(knots: &[f64], p: usize, i: usize, u: f64, lower: f64) -> f64 {
    let a = (u - knots[i]) / (knots[i + p] - knots[i]) * lower;
    if a.is_nan() {
        0.0
    } else {
        a
    }
}

fn right_term(knots: &[f64], p: usize, i: usize, u: f64, lower: f64) -> f64 {
    let b = (knots[i + p + 1] - u) / (knots[i + p + 1] - knots[i + 1]) * lower;
    if b.is_nan() {
        0.0
    } else {
        b
    }
}

/// The non-vanishing basis functions at `u`.
///
/// Returns the span from [`knot_span_for`] and the `p + 1` values
/// `N_{span-p,p}(u)` through `N_{span,p}(u)`. Returns `None` when `u` lies before
/// the first knot or the span has fewer than `p` basis functions to its left.
pub fn active_basis(knots: &[f64], p: usize, u: f64) -> Option<(usize, Vec<f64>)> {
    let span = knot_span_for(knots, u)?;
    let first = span.checked_sub(p)?;
    // Basis functions past the end would read beyond the knot vector.
    let last = span.min(knots.len().checked_sub(p + 2)?);
    let values = (first..=span)
        .map(|i| if i <= last { basis(knots, p, i, u) } else { 0.0 })
        .collect();
    Some((span, values))
}

/// `N_{i,p}` with the knot vector, degree and index bound in.
#[derive(Debug, Clone, Copy)]
pub struct BasisFunction<'a> {
    knots: &'a [f64],
    degree: usize,
    index: usize,
}

impl<'a> BasisFunction<'a> {
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn eval(&self, u: f64) -> f64 {
        basis(self.knots, self.degree, self.index, u)
    }
}

/// All basis functions of one degree over a knot vector, indexed at call time.
#[derive(Debug, Clone, Copy)]
pub struct BasisFamily<'a> {
    knots: &'a [f64],
    degree: usize,
}

impl<'a> BasisFamily<'a> {
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &'a [f64] {
        self.knots
    }

    pub fn eval(&self, i: usize, u: f64) -> f64 {
        basis(self.knots, self.degree, i, u)
    }

    /// The single function `N_{i,p}` of this family.
    pub fn function(&self, i: usize) -> BasisFunction<'a> {
        basis_fn(self.knots, self.degree, i)
    }

    /// Number of basis functions the knot vector supports at this degree.
    pub fn len(&self) -> usize {
        self.knots.len().saturating_sub(self.degree + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bind `(knots, p, i)` into a function of the parameter.
pub fn basis_fn(knots: &[f64], p: usize, i: usize) -> BasisFunction<'_> {
    debug_assert!(i < knots.len(), "basis index {} out of range for {} knots", i, knots.len());
    BasisFunction {
        knots,
        degree: p,
        index: i,
    }
}

/// Bind `(knots, p)` into a function of `(index, parameter)`.
pub fn basis_family(knots: &[f64], p: usize) -> BasisFamily<'_> {
    BasisFamily { knots, degree: p }
}
