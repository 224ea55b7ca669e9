//! Incremental construction of 3D convex hulls.
//!
//! The hull is grown one point at a time: a seed tetrahedron is built from
//! four extremal points, then the point furthest outside the current hull is
//! added repeatedly, replacing the connected patch of faces it can see by a
//! fan of new faces around the boundary of that patch.
//!
//! [`HullBuilder`] works in place on caller-owned buffers: a permutation of
//! point indices that is split into hull, unclassified and interior zones, and
//! a face buffer whose triangles refer to positions within that permutation.
//! [`ConvexHull`] wraps it for the common case of an owned point slice.
//!
//! ```
//! use nalgebra as na;
//! use hullkit::ConvexHull;
//!
//! let mut points = Vec::new();
//! for &x in &[0.0, 1.0] {
//!     for &y in &[0.0, 1.0] {
//!         for &z in &[0.0, 1.0] {
//!             points.push(na::Point3::new(x, y, z));
//!         }
//!     }
//! }
//! points.push(na::Point3::new(0.5, 0.5, 0.5));
//!
//! let hull = ConvexHull::from_points(&points).unwrap();
//! assert_eq!(hull.vertices().len(), 8);
//! assert_eq!(hull.faces().len(), 12);
//! ```

use std::fmt;

use nalgebra as na;

mod builder;
mod config;
mod error;
mod expand;
mod face;
mod initial;
mod observer;
mod partition;
mod plane;
mod source;
mod zones;

#[cfg(feature = "genmesh")]
mod genmesh;

pub use builder::{compute_hull, max_face_count, HullBuilder};
pub use config::{HullConfig, DEFAULT_EPSILON};
pub use error::{Degeneracy, HullError};
pub use face::Face;
pub use observer::{HullObserver, LogObserver};
pub use plane::Plane;
pub use source::PointSource;

pub type Point = na::Point3<f64>;

/// Size of a finished (or partial) hull.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HullCounts {
    /// Number of leading entries of the vertex index buffer that are hull vertices.
    pub vertex_count: usize,
    /// Number of leading entries of the face buffer that are hull faces.
    pub face_count: usize,
}

impl fmt::Display for HullCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices and {} faces",
            self.vertex_count, self.face_count
        )
    }
}

/// An owned convex hull of a point slice.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    vertices: Vec<(Point, usize)>,
    faces: Vec<Face>,
}

impl ConvexHull {
    pub fn from_points(points: &[Point]) -> Result<Self, HullError> {
        Self::with_config(points, HullConfig::default())
    }

    pub fn with_config(points: &[Point], config: HullConfig) -> Result<Self, HullError> {
        let mut vertex_indices: Vec<usize> = (0..points.len()).collect();
        let mut faces_out = vec![[0; 3]; max_face_count(points.len())];

        let mut builder = HullBuilder::with_config(config);
        let counts = builder.build(points, &mut vertex_indices, &mut faces_out)?;

        let vertices = vertex_indices[..counts.vertex_count]
            .iter()
            .map(|&index| (points[index], index))
            .collect();
        Ok(Self {
            vertices,
            faces: builder.faces().to_vec(),
        })
    }

    /// Hull vertices paired with their index in the input slice.
    pub fn vertices(&self) -> &[(Point, usize)] {
        &self.vertices
    }

    /// Hull faces; their indices refer to [`ConvexHull::vertices`].
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Hull faces as indices into the input slice.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.faces
            .iter()
            .map(move |face| face.indices.map(|position| self.vertices[position].1))
    }

    #[cfg(feature = "genmesh")]
    pub fn mesh_generator(&self) -> crate::genmesh::ConvexHullMeshGenerator<'_> {
        crate::genmesh::ConvexHullMeshGenerator::new(self)
    }
}
