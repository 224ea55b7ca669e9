use std::fmt;

use thiserror::Error;

use crate::HullCounts;

/// The way a point set fails to span a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Every point lies within tolerance of a single point.
    Coincident,
    /// Every point lies within tolerance of a single line.
    Collinear,
    /// Every point lies within tolerance of a single plane.
    Coplanar,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Degeneracy::Coincident => "coincident",
            Degeneracy::Collinear => "collinear",
            Degeneracy::Coplanar => "coplanar",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`HullBuilder::build`](crate::HullBuilder::build).
///
/// Every variant except [`HullError::StorageExhausted`] leaves the face output
/// untouched and reports zero vertices and faces through [`HullError::counts`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// Fewer than four vertex indices were supplied.
    #[error("need at least 4 points to build a hull, got {0}")]
    InsufficientPoints(usize),

    /// The face output cannot even hold the seed tetrahedron.
    #[error("face storage holds {available} faces, at least {required} required")]
    InsufficientStorage { required: usize, available: usize },

    /// A vertex index points past the end of the point source.
    #[error("vertex index {index} at position {position} is out of range for {len} points")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    /// A referenced point has a NaN or infinite coordinate.
    #[error("point {0} has a non-finite coordinate")]
    NonFinitePoint(usize),

    /// The points do not bound a volume.
    #[error("degenerate point set: all points are {0}")]
    Degenerate(Degeneracy),

    /// The face output filled up before every point was enclosed.
    ///
    /// The counts describe a closed, convex, outward-oriented polytope that was
    /// written to the output buffers. It is the hull of a subset of the input, so
    /// some input points may lie outside of it.
    #[error("face storage exhausted with a partial hull of {0}")]
    StorageExhausted(HullCounts),

    /// An internal consistency check failed. Please report it as a bug with the
    /// input that triggered it.
    #[error("internal error: {0}")]
    InternalError(&'static str),
}

impl HullError {
    /// Vertex and face counts left in the output buffers by the failed run.
    pub fn counts(&self) -> HullCounts {
        match self {
            HullError::StorageExhausted(counts) => *counts,
            _ => HullCounts::default(),
        }
    }
}
