//! Knot vector utilities: span search and validation.

use knotwork_core::{Result, SplineError};

/// Find the knot span index for parameter `u`.
///
/// Returns the last index `i` with `knots[i] <= u`, so that
/// `knots[i] <= u < knots[i+1]` whenever such a span exists. Among repeated
/// knots the largest index wins. The parameter is not clamped: `u` at or past
/// the last knot yields `knots.len() - 1`, and `u` before the first knot (or an
/// empty knot vector) yields `None`.
///
/// # Arguments
/// * `knots` - Non-decreasing knot vector
/// * `u` - Parameter value
pub fn knot_span_for(knots: &[f64], u: f64) -> Option<usize> {
    // `lower` starts on a virtual -1 sentinel, `upper` one past the end.
    let mut lower: isize = -1;
    let mut upper = knots.len() as isize;

    while upper - lower > 1 {
        let mid = (upper + lower) / 2;
        if knots[mid as usize] > u {
            upper = mid;
        } else {
            lower = mid;
        }
    }

    usize::try_from(lower).ok()
}

/// Check that `knots` is non-empty, finite and non-decreasing.
pub fn validate_knots(knots: &[f64]) -> Result<()> {
    if knots.is_empty() {
        return Err(invalid("knot vector is empty".into()));
    }
    if let Some(i) = knots.iter().position(|k| !k.is_finite()) {
        return Err(invalid(format!("knot {} is not finite", i)));
    }
    if let Some(i) = knots.windows(2).position(|w| w[1] < w[0]) {
        return Err(invalid(format!(
            "knots decrease at index {} ({} > {})",
            i + 1,
            knots[i],
            knots[i + 1]
        )));
    }
    Ok(())
}

/// Whether the first and last `degree + 1` knots are repeated (open/clamped).
pub fn is_clamped(knots: &[f64], degree: usize) -> bool {
    if knots.len() < 2 * (degree + 1) {
        return false;
    }
    let first = knots[0];
    let last = knots[knots.len() - 1];
    knots[..=degree].iter().all(|&k| k == first)
        && knots[knots.len() - degree - 1..].iter().all(|&k| k == last)
}

/// Number of times `knots[index]` is repeated.
pub fn multiplicity(knots: &[f64], index: usize) -> usize {
    let k = knots[index];
    knots.iter().filter(|&&v| v == k).count()
}

fn invalid(reason: String) -> SplineError {
    tracing::debug!(%reason, "rejected knot vector");
    SplineError::InvalidKnotVector(reason)
}
