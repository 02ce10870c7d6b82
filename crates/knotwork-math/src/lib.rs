pub mod aabb;
pub mod homogeneous;

pub use glam::{dvec3, dvec4, DVec3, DVec4};
pub use aabb::Aabb3;
pub use homogeneous::{project, to_homogeneous, weighted};

pub type Point3 = DVec3;
/// Homogeneous point `(x·w, y·w, z·w, w)`.
pub type Point4 = DVec4;
pub type Vector3 = DVec3;
