use nalgebra as na;

use crate::Point;

/// Normal length below which three points are treated as collinear.
const MIN_NORMAL_NORM: f64 = 1e-30;

/// Supporting plane of a hull face, stored as a unit normal and an offset.
///
/// Points on the hull side satisfy `signed_distance(p) <= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: na::Vector3<f64>,
    offset: f64,
}

impl Plane {
    /// Plane through `a`, `b`, `c`, facing the side from which the triangle
    /// winds counter-clockwise. Returns `None` when the points are collinear.
    pub fn new(a: &Point, b: &Point, c: &Point) -> Option<Self> {
        let edge1 = b - a;
        let edge2 = c - a;
        let normal = edge1.cross(&edge2).try_normalize(MIN_NORMAL_NORM)?;
        let offset = -normal.dot(&a.coords);

        Some(Self { normal, offset })
    }

    pub fn normal(&self) -> &na::Vector3<f64> {
        &self.normal
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The plane as a homogeneous 4-vector, so that `dot(plane, (x, y, z, 1))`
    /// is the signed distance.
    pub fn to_homogeneous(&self) -> na::Vector4<f64> {
        na::Vector4::new(self.normal.x, self.normal.y, self.normal.z, self.offset)
    }

    pub fn signed_distance(&self, point: &Point) -> f64 {
        self.normal.dot(&point.coords) + self.offset
    }
}
