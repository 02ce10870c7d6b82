//! Conversions between 3D points and homogeneous (weighted) 4D points.

use crate::{Point3, Point4};

/// Lift a 3D point into homogeneous space with weight 1.
pub fn to_homogeneous(p: Point3) -> Point4 {
    p.extend(1.0)
}

/// Lift a 3D point with weight `w`, storing `(x·w, y·w, z·w, w)`.
pub fn weighted(p: Point3, w: f64) -> Point4 {
    (p * w).extend(w)
}

/// Divide through by `w`. Returns `None` for a (near) zero weight.
pub fn project(h: Point4) -> Option<Point3> {
    if h.w.abs() < f64::EPSILON {
        None
    } else {
        Some(h.truncate() / h.w)
    }
}
