//! Bezier curve in direct polynomial (Bernstein-weighted sum) form.

use knotwork_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::basis::Bernstein;

/// A Bezier curve `C(u) = Σ B_{i,n}(u) P_i` over `u ∈ [0, 1]`.
///
/// One [`Bernstein`] function is built per control point when the curve is
/// constructed, so repeated evaluation reuses the binomial coefficients.
/// A curve without control points evaluates to the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Point3>", into = "Vec<Point3>")]
pub struct BezierCurve {
    control_points: Vec<Point3>,
    basis: Vec<Bernstein>,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point3>) -> Self {
        let degree = control_points.len().saturating_sub(1) as u32;
        let basis = (0..=degree)
            .take(control_points.len())
            .map(|i| Bernstein::new(i, degree))
            .collect();
        Self {
            control_points,
            basis,
        }
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// Number of control points.
    pub fn order(&self) -> usize {
        self.control_points.len()
    }

    pub fn degree(&self) -> usize {
        self.order().saturating_sub(1)
    }

    /// Evaluate at `u ∈ [0, 1]`.
    pub fn eval(&self, u: f64) -> Point3 {
        debug_assert!((0.0..=1.0).contains(&u), "Bezier parameter {} outside [0, 1]", u);
        self.basis
            .iter()
            .zip(&self.control_points)
            .fold(Point3::ZERO, |sum, (b, &p)| sum + b.eval(u) * p)
    }

    /// First derivative at `u`, from the degree `n-1` hodograph.
    pub fn derivative_at(&self, u: f64) -> Vector3 {
        let n = self.degree();
        if n == 0 {
            return Vector3::ZERO;
        }
        let lower = (n - 1) as u32;
        self.control_points
            .windows(2)
            .enumerate()
            .fold(Vector3::ZERO, |sum, (i, w)| {
                sum + Bernstein::new(i as u32, lower).eval(u) * (w[1] - w[0])
            })
            * n as f64
    }
}

impl From<Vec<Point3>> for BezierCurve {
    fn from(control_points: Vec<Point3>) -> Self {
        Self::new(control_points)
    }
}

impl From<BezierCurve> for Vec<Point3> {
    fn from(curve: BezierCurve) -> Self {
        curve.control_points
    }
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Point3 {
        self.eval(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.derivative_at(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// Build the evaluator `u ↦ Σ B_{i,n}(u) P_i` for the given control points.
pub fn bezier<I>(control_points: I) -> BezierCurve
where
    I: IntoIterator<Item = Point3>,
{
    BezierCurve::new(control_points.into_iter().collect())
}
