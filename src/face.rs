use crate::{Plane, Point, PointSource};

/// A triangular hull face together with its cached supporting plane.
///
/// `indices` are positions within the vertex index buffer, not point indices.
/// Winding is counter-clockwise when viewed from outside the hull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub indices: [usize; 3],
    pub plane: Plane,
}

impl Face {
    /// Builds the face and its plane, resolving positions through `vertex_indices`.
    /// Returns `None` if the three points are collinear.
    pub(crate) fn new<P: PointSource + ?Sized>(
        indices: [usize; 3],
        points: &P,
        vertex_indices: &[usize],
    ) -> Option<Self> {
        let [a, b, c] = indices.map(|position| points.point(vertex_indices[position]));
        let plane = Plane::new(&a, &b, &c)?;
        Some(Self { indices, plane })
    }

    pub fn signed_distance(&self, point: &Point) -> f64 {
        self.plane.signed_distance(point)
    }

    /// The three directed edges of the face, in winding order.
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.indices;
        [(a, b), (b, c), (c, a)]
    }
}
