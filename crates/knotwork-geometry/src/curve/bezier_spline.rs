//! Homogeneous Bezier spline evaluated with de Casteljau's algorithm.

use knotwork_core::error::check_domain;
use knotwork_core::traits::{BoundingBox, Validate};
use knotwork_core::{Result, SplineError};
use knotwork_math::{project, to_homogeneous, Aabb3, Point3, Point4, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A Bezier curve over homogeneous control points `(x·w, y·w, z·w, w)`.
///
/// The control points are fixed at construction. [`BezierSpline::derivative`]
/// returns a new spline and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point4>", into = "Vec<Point4>")]
pub struct BezierSpline {
    control_points: Vec<Point4>,
}

impl BezierSpline {
    /// Build from homogeneous control points. Fails on an empty list.
    pub fn new(control_points: Vec<Point4>) -> Result<Self> {
        if control_points.is_empty() {
            return Err(SplineError::EmptyControlPoints);
        }
        tracing::trace!(order = control_points.len(), "bezier spline");
        Ok(Self { control_points })
    }

    /// Build from plain 3D points, each with weight 1.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        Self::new(points.into_iter().map(to_homogeneous).collect())
    }

    pub fn control_points(&self) -> &[Point4] {
        &self.control_points
    }

    /// Number of control points.
    pub fn order(&self) -> usize {
        self.control_points.len()
    }

    pub fn degree(&self) -> usize {
        self.order() - 1
    }

    /// Evaluate the homogeneous curve point at `u` by de Casteljau's algorithm.
    ///
    /// Divide by `w` (see [`project`]) to get the 3D point.
    pub fn evaluate_at(&self, u: f64) -> Point4 {
        debug_assert!((0.0..=1.0).contains(&u), "Bezier parameter {} outside [0, 1]", u);
        let mut q = self.control_points.clone();
        let n = q.len() - 1;
        for k in 0..n {
            for j in 0..n - k {
                q[j] = (1.0 - u) * q[j] + u * q[j + 1];
            }
        }
        q[0]
    }

    /// Checked form of [`BezierSpline::evaluate_at`].
    pub fn try_evaluate_at(&self, u: f64) -> Result<Point4> {
        check_domain(u, 0.0, 1.0)?;
        Ok(self.evaluate_at(u))
    }

    /// The derivative curve, with control points `n·(P_{i+1} - P_i)`.
    ///
    /// A degree 0 spline has no derivative control points and yields
    /// [`SplineError::ConstantDerivative`].
    pub fn derivative(&self) -> Result<Self> {
        let degree = self.degree();
        if degree == 0 {
            tracing::debug!("derivative requested for a constant bezier spline");
            return Err(SplineError::ConstantDerivative);
        }
        let scale = degree as f64;
        let control_points = self
            .control_points
            .windows(2)
            .map(|w| scale * (w[1] - w[0]))
            .collect();
        Ok(Self { control_points })
    }
}

impl TryFrom<Vec<Point4>> for BezierSpline {
    type Error = SplineError;

    fn try_from(control_points: Vec<Point4>) -> Result<Self> {
        Self::new(control_points)
    }
}

impl From<BezierSpline> for Vec<Point4> {
    fn from(spline: BezierSpline) -> Self {
        spline.control_points
    }
}

impl Validate for BezierSpline {
    fn validate(&self) -> Result<()> {
        if self.control_points.is_empty() {
            return Err(SplineError::EmptyControlPoints);
        }
        Ok(())
    }
}

impl BoundingBox for BezierSpline {
    type Point = Point3;

    /// Box around the projected control points; points with zero weight are skipped.
    fn bounding_box(&self) -> (Point3, Point3) {
        Aabb3::from_points(self.control_points.iter().filter_map(|&h| project(h)))
            .map(|aabb| (aabb.min, aabb.max))
            .unwrap_or((Point3::ZERO, Point3::ZERO))
    }
}

impl Curve for BezierSpline {
    fn point_at(&self, t: f64) -> Point3 {
        let h = self.evaluate_at(t);
        project(h).unwrap_or_else(|| h.truncate())
    }

    /// Quotient rule on `C = A / w`: `C' = (A' - w'·C) / w`.
    fn tangent_at(&self, t: f64) -> Vector3 {
        let Ok(derivative) = self.derivative() else {
            return Vector3::ZERO;
        };
        let h = self.evaluate_at(t);
        let dh = derivative.evaluate_at(t);
        match project(h) {
            Some(c) => (dh.truncate() - dh.w * c) / h.w,
            None => dh.truncate(),
        }
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
