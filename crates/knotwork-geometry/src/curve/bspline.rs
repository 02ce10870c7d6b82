//! Clamped B-spline curve evaluated from Cox–de Boor basis values.

use knotwork_core::traits::{BoundingBox, Validate};
use knotwork_core::{Result, SplineError};
use knotwork_math::{Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::basis::{active_basis, is_clamped, validate_knots};

/// A B-spline curve defined by degree, clamped knot vector, and control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BSplineCurveDef")]
pub struct BSplineCurve {
    degree: usize,
    knots: Vec<f64>,
    control_points: Vec<Point3>,
}

/// Unchecked wire form; deserialization goes through [`BSplineCurve::new`].
#[derive(Deserialize)]
struct BSplineCurveDef {
    degree: usize,
    knots: Vec<f64>,
    control_points: Vec<Point3>,
}

impl TryFrom<BSplineCurveDef> for BSplineCurve {
    type Error = SplineError;

    fn try_from(def: BSplineCurveDef) -> Result<Self> {
        Self::new(def.degree, def.knots, def.control_points)
    }
}

impl BSplineCurve {
    /// Build a curve, checking `knots.len() == control_points.len() + degree + 1`
    /// and that both ends of the knot vector are clamped.
    pub fn new(degree: usize, knots: Vec<f64>, control_points: Vec<Point3>) -> Result<Self> {
        let curve = Self {
            degree,
            knots,
            control_points,
        };
        curve.validate()?;
        tracing::trace!(
            degree,
            control_points = curve.control_points.len(),
            "b-spline curve"
        );
        Ok(curve)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// The derivative curve: degree `p-1` over the knots with both ends trimmed,
    /// control points `p/(k_{i+p+1} - k_{i+1}) · (P_{i+1} - P_i)`.
    pub fn derivative(&self) -> Result<Self> {
        let p = self.degree;
        if p == 0 {
            tracing::debug!("derivative requested for a constant b-spline");
            return Err(SplineError::ConstantDerivative);
        }
        let k = &self.knots;
        let control_points = self
            .control_points
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let span = k[i + p + 1] - k[i + 1];
                // Zero-length spans contribute nothing.
                if span == 0.0 {
                    Vector3::ZERO
                } else {
                    (w[1] - w[0]) * (p as f64 / span)
                }
            })
            .collect();
        Ok(Self {
            degree: p - 1,
            knots: k[1..k.len() - 1].to_vec(),
            control_points,
        })
    }
}

impl Validate for BSplineCurve {
    fn validate(&self) -> Result<()> {
        if self.control_points.is_empty() {
            return Err(SplineError::EmptyControlPoints);
        }
        validate_knots(&self.knots)?;
        let expected = self.control_points.len() + self.degree + 1;
        if self.knots.len() != expected {
            return Err(SplineError::InvalidKnotVector(format!(
                "expected {} knots for {} control points of degree {}, got {}",
                expected,
                self.control_points.len(),
                self.degree,
                self.knots.len()
            )));
        }
        if !is_clamped(&self.knots, self.degree) {
            return Err(SplineError::InvalidKnotVector(format!(
                "knot vector is not clamped for degree {}",
                self.degree
            )));
        }
        Ok(())
    }
}

impl BoundingBox for BSplineCurve {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        Aabb3::from_points(self.control_points.iter().copied())
            .map(|aabb| (aabb.min, aabb.max))
            .unwrap_or((Point3::ZERO, Point3::ZERO))
    }
}

impl Curve for BSplineCurve {
    /// Parameters outside the domain are clamped to it.
    fn point_at(&self, t: f64) -> Point3 {
        let (t_min, t_max) = self.domain();
        let t = t.clamp(t_min, t_max);
        // Every half-open span is empty at the closing knot; a clamped curve
        // ends on its last control point.
        if t >= t_max {
            return self.control_points[self.control_points.len() - 1];
        }
        let Some((span, basis)) = active_basis(&self.knots, self.degree, t) else {
            return self.control_points[0];
        };
        let first = span - self.degree;
        basis
            .iter()
            .zip(&self.control_points[first..])
            .fold(Point3::ZERO, |sum, (&n, &p)| sum + n * p)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.derivative()
            .map(|d| d.point_at(t))
            .unwrap_or(Vector3::ZERO)
    }

    fn domain(&self) -> (f64, f64) {
        let p = self.degree;
        (self.knots[p], self.knots[self.knots.len() - p - 1])
    }
}
