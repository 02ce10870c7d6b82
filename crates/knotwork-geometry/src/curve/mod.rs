//! Curve traits and implementations.

mod bezier_curve;
mod bezier_spline;
mod bspline;

use knotwork_core::Tolerance;
use knotwork_math::{Point3, Vector3};

pub use bezier_curve::{bezier, BezierCurve};
pub use bezier_spline::BezierSpline;
pub use bspline::BSplineCurve;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        let (t_min, t_max) = self.domain();
        let gap = (self.point_at(t_max) - self.point_at(t_min)).length();
        Tolerance::default().is_zero(gap)
    }

    /// Sample `count` evenly spaced points across the domain, ends included.
    fn sample(&self, count: usize) -> Vec<Point3> {
        let (t_min, t_max) = self.domain();
        match count {
            0 => Vec::new(),
            1 => vec![self.point_at(t_min)],
            _ => (0..count)
                .map(|i| {
                    let s = i as f64 / (count - 1) as f64;
                    self.point_at(t_min + (t_max - t_min) * s)
                })
                .collect(),
        }
    }
}
