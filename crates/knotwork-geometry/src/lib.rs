//! Knotwork geometry: Bernstein and B-spline bases, Bezier and B-spline curves.

pub mod basis;
pub mod curve;

pub use basis::{
    active_basis, basis, basis_family, basis_fn, basis_memoized, bernstein, bernstein_at,
    knot_span_for, Bernstein, BasisFamily, BasisFunction,
};
pub use curve::{bezier, BSplineCurve, BezierCurve, BezierSpline, Curve};
