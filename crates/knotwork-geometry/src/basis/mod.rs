//! Scalar basis functions: Bernstein polynomials and B-spline bases.

pub mod bernstein;
pub mod cox_de_boor;
pub mod knot;

pub use bernstein::{bernstein, bernstein_at, binomial, factorial, factorial_f64, Bernstein};
pub use cox_de_boor::{
    active_basis, basis, basis_family, basis_fn, basis_memoized, try_basis, BasisFamily,
    BasisFunction,
};
pub use knot::{is_clamped, knot_span_for, multiplicity, validate_knots};
