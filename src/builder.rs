use crate::{
    expand::{expand, ExpandScratch, Growth},
    initial::init_tetrahedron,
    partition::partition,
    zones::Zones,
    Face, HullConfig, HullCounts, HullError, HullObserver, PointSource,
};

/// Number of faces that guarantees a hull over `point_count` points can be
/// completed: a triangulated sphere with `n` vertices has `2 * (n - 2)` faces.
pub fn max_face_count(point_count: usize) -> usize {
    2 * point_count.saturating_sub(2)
}

/// Builds a hull with a default [`HullBuilder`].
///
/// See [`HullBuilder::build`].
pub fn compute_hull<P: PointSource + ?Sized>(
    points: &P,
    vertex_indices: &mut [usize],
    faces_out: &mut [[usize; 3]],
) -> Result<HullCounts, HullError> {
    HullBuilder::new().build(points, vertex_indices, faces_out)
}

/// Incremental convex hull construction over caller-owned buffers.
///
/// The builder owns only scratch state (live faces with their planes and the
/// per-step working sets), so one builder can be reused across many point sets
/// without reallocating.
#[derive(Debug, Default, Clone)]
pub struct HullBuilder {
    config: HullConfig,
    faces: Vec<Face>,
    scratch: ExpandScratch,
    referenced: Vec<bool>,
}

impl HullBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HullConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &HullConfig {
        &self.config
    }

    /// Faces of the hull produced by the last run, with their planes.
    ///
    /// Empty if the last run failed before a hull existed.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Builds the convex hull of the points named by `vertex_indices`.
    ///
    /// `vertex_indices` is permuted in place. On success its first
    /// `vertex_count` entries are exactly the hull vertices, and
    /// `faces_out[..face_count]` holds outward-facing (counter-clockwise)
    /// triangles whose entries are positions within `vertex_indices`, all below
    /// `vertex_count`.
    ///
    /// `faces_out.len()` bounds the number of faces the hull may have at any
    /// time; [`max_face_count`] is always enough.
    ///
    /// # Errors
    ///
    /// - [`HullError::InsufficientPoints`] for fewer than 4 vertex indices.
    /// - [`HullError::InsufficientStorage`] if `faces_out` holds fewer than 4 faces.
    /// - [`HullError::IndexOutOfRange`] and [`HullError::NonFinitePoint`] for bad input.
    /// - [`HullError::Degenerate`] if the points do not span a volume.
    /// - [`HullError::StorageExhausted`] if `faces_out` filled up mid-run. The
    ///   buffers then hold a closed, convex polytope over a subset of the points
    ///   as described by the counts in the error; it is not guaranteed to
    ///   enclose every point.
    pub fn build<P: PointSource + ?Sized>(
        &mut self,
        points: &P,
        vertex_indices: &mut [usize],
        faces_out: &mut [[usize; 3]],
    ) -> Result<HullCounts, HullError> {
        self.build_observed(points, vertex_indices, faces_out, &mut ())
    }

    /// Same as [`HullBuilder::build`], reporting every change to `observer`.
    pub fn build_observed<P, O>(
        &mut self,
        points: &P,
        vertex_indices: &mut [usize],
        faces_out: &mut [[usize; 3]],
        observer: &mut O,
    ) -> Result<HullCounts, HullError>
    where
        P: PointSource + ?Sized,
        O: HullObserver + ?Sized,
    {
        self.faces.clear();

        let point_count = vertex_indices.len();
        if point_count < 4 {
            return Err(HullError::InsufficientPoints(point_count));
        }
        if faces_out.len() < 4 {
            return Err(HullError::InsufficientStorage {
                required: 4,
                available: faces_out.len(),
            });
        }
        validate(points, vertex_indices)?;

        log::debug!(
            "building hull over {} points with room for {} faces",
            point_count,
            faces_out.len()
        );

        let epsilon = self.config.epsilon;
        let mut zones = Zones::new(point_count);
        if let Err(err) =
            init_tetrahedron(points, vertex_indices, &mut zones, epsilon, &mut self.faces)
        {
            log::debug!("no seed tetrahedron: {}", err);
            return Err(err);
        }
        for position in 0..zones.hull_end {
            observer.vertex_added(position, vertex_indices[position]);
        }
        for (position, face) in self.faces.iter().enumerate() {
            observer.face_added(position, face);
        }

        while let Some(candidate) =
            partition(points, vertex_indices, &mut zones, &self.faces, epsilon)
        {
            let growth = expand(
                points,
                vertex_indices,
                &mut zones,
                &mut self.faces,
                faces_out.len(),
                epsilon,
                candidate,
                &mut self.scratch,
                observer,
            )?;

            match growth {
                Growth::Grown => log::trace!(
                    "added vertex at distance {:.3e}, hull has {} vertices and {} faces",
                    candidate.distance,
                    zones.hull_end,
                    self.faces.len()
                ),
                Growth::OutOfStorage => {
                    let counts = self.finish(vertex_indices, &mut zones, faces_out, observer);
                    log::debug!("face storage exhausted, keeping partial hull of {}", counts);
                    return Err(HullError::StorageExhausted(counts));
                }
            }
        }

        let counts = self.finish(vertex_indices, &mut zones, faces_out, observer);
        log::debug!("hull complete with {}", counts);
        Ok(counts)
    }

    /// Drops buried vertices from the hull zone and copies the faces out.
    ///
    /// A vertex can enter the hull and later be enclosed by a farther one; once
    /// no face refers to it, it is moved to the interior zone and the last hull
    /// vertex takes its position. Each move is reported through
    /// [`HullObserver::vertex_retired`].
    fn finish<O: HullObserver + ?Sized>(
        &mut self,
        vertex_indices: &mut [usize],
        zones: &mut Zones,
        faces_out: &mut [[usize; 3]],
        observer: &mut O,
    ) -> HullCounts {
        self.referenced.clear();
        self.referenced.resize(zones.hull_end, false);
        for face in &self.faces {
            for &position in &face.indices {
                self.referenced[position] = true;
            }
        }

        for position in (0..zones.hull_end).rev() {
            if self.referenced[position] {
                continue;
            }
            let moved_from = zones.retire(vertex_indices, position);
            observer.vertex_retired(position, moved_from);
            if moved_from == position {
                continue;
            }
            for index in self.faces.iter_mut().flat_map(|face| face.indices.iter_mut()) {
                if *index == moved_from {
                    *index = position;
                }
            }
        }

        for (slot, face) in faces_out.iter_mut().zip(&self.faces) {
            *slot = face.indices;
        }

        let counts = HullCounts {
            vertex_count: zones.hull_end,
            face_count: self.faces.len(),
        };
        observer.finished(counts);
        counts
    }
}

fn validate<P: PointSource + ?Sized>(points: &P, vertex_indices: &[usize]) -> Result<(), HullError> {
    let len = points.len();
    for (position, &index) in vertex_indices.iter().enumerate() {
        if index >= len {
            return Err(HullError::IndexOutOfRange {
                position,
                index,
                len,
            });
        }
        if !points.point(index).coords.iter().all(|c| c.is_finite()) {
            return Err(HullError::NonFinitePoint(index));
        }
    }
    Ok(())
}
