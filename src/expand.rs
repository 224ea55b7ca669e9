use std::collections::HashMap;

use indexmap::IndexSet;

use crate::{
    partition::Candidate, zones::Zones, Face, HullError, HullObserver, Plane, Point, PointSource,
};

/// Directed edges on the boundary of a patch of faces.
///
/// Inserting an edge whose mirror is already present removes the mirror
/// instead, so once every edge of a patch is inserted only its boundary
/// remains.
#[derive(Debug, Default, Clone)]
pub(crate) struct PerimeterEdges {
    edges: IndexSet<(usize, usize)>,
    /// Boundary edges touching each hull position.
    degree: Vec<usize>,
    next: HashMap<usize, usize>,
}

impl PerimeterEdges {
    /// Empties the set for a hull with `vertex_count` vertices.
    pub fn clear(&mut self, vertex_count: usize) {
        self.edges.clear();
        self.degree.clear();
        self.degree.resize(vertex_count, 0);
    }

    pub fn insert(&mut self, a: usize, b: usize) -> Result<(), HullError> {
        if self.edges.swap_remove(&(b, a)) {
            self.degree[a] -= 1;
            self.degree[b] -= 1;
            return Ok(());
        }
        if !self.edges.insert((a, b)) {
            return Err(HullError::InternalError(
                "directed edge shared by two visible faces",
            ));
        }
        self.degree[a] += 1;
        self.degree[b] += 1;
        Ok(())
    }

    fn touches(&self, position: usize) -> bool {
        self.degree.get(position).map_or(false, |&degree| degree > 0)
    }

    /// Whether the patch stays a disk after `face`, a neighbour across one of
    /// the boundary edges, joins it.
    pub fn can_absorb(&self, face: &Face) -> bool {
        let mut shared = 0;
        let mut opposite = None;
        for (i, (a, b)) in face.edges().into_iter().enumerate() {
            if self.edges.contains(&(b, a)) {
                shared += 1;
                opposite = Some(face.indices[(i + 2) % 3]);
            }
        }

        match (shared, opposite) {
            // A third vertex already on the boundary would pinch the patch.
            (1, Some(opposite)) => !self.touches(opposite),
            // Fills a notch; the boundary must keep at least three edges.
            (2, _) => self.edges.len() > 3,
            _ => false,
        }
    }

    /// Whether the edges form exactly one closed loop.
    pub fn is_single_loop(&mut self) -> bool {
        let len = self.edges.len();
        let Some(&(start, _)) = self.edges.first() else {
            return false;
        };

        self.next.clear();
        for &(a, b) in &self.edges {
            if self.next.insert(a, b).is_some() {
                return false;
            }
        }

        let mut vertex = start;
        for step in 1..=len {
            match self.next.get(&vertex) {
                Some(&next) => vertex = next,
                None => return false,
            }
            if vertex == start {
                return step == len && len >= 3;
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }
}

/// Working sets of one expansion step, kept between steps to reuse their
/// allocations.
#[derive(Debug, Default, Clone)]
pub(crate) struct ExpandScratch {
    /// Face on the left of each directed edge.
    edge_faces: HashMap<(usize, usize), usize>,
    in_region: Vec<bool>,
    pending: Vec<usize>,
    visible: Vec<usize>,
    perimeter: PerimeterEdges,
}

/// Collects the faces replaced by `apex` into `scratch.visible` and the
/// boundary of that patch into `scratch.perimeter`.
///
/// The patch grows from `start` across shared edges into faces the apex lies
/// more than `threshold` in front of, and only while it stays a disk. A face
/// the apex sees that cannot be reached this way is left in place, so the
/// boundary is always a single loop.
fn visible_region(
    faces: &[Face],
    apex: &Point,
    start: usize,
    vertex_count: usize,
    threshold: f64,
    scratch: &mut ExpandScratch,
) -> Result<(), HullError> {
    let ExpandScratch {
        edge_faces,
        in_region,
        pending,
        visible,
        perimeter,
    } = scratch;

    edge_faces.clear();
    for (position, face) in faces.iter().enumerate() {
        for edge in face.edges() {
            edge_faces.insert(edge, position);
        }
    }
    in_region.clear();
    in_region.resize(faces.len(), false);
    visible.clear();
    perimeter.clear(vertex_count);

    pending.clear();
    pending.push(start);
    while let Some(position) = pending.pop() {
        if in_region[position] {
            continue;
        }
        let face = &faces[position];
        if position != start
            && (face.signed_distance(apex) <= threshold || !perimeter.can_absorb(face))
        {
            continue;
        }

        in_region[position] = true;
        visible.push(position);
        for (a, b) in face.edges() {
            perimeter.insert(a, b)?;
            let neighbour = *edge_faces
                .get(&(b, a))
                .ok_or(HullError::InternalError("hull surface has an open edge"))?;
            if !in_region[neighbour] {
                pending.push(neighbour);
            }
        }
    }

    if !perimeter.is_single_loop() {
        return Err(HullError::InternalError(
            "visible region boundary is not a single loop",
        ));
    }
    Ok(())
}

/// Whether the fan from `apex` onto the boundary of the patch bends outwards
/// everywhere: across each boundary edge, the third vertex of the replaced
/// face must lie strictly behind the new face.
fn fan_is_convex<P: PointSource + ?Sized>(
    points: &P,
    vertex_indices: &[usize],
    faces: &[Face],
    apex: &Point,
    scratch: &ExpandScratch,
) -> bool {
    let point_at = |position: usize| points.point(vertex_indices[position]);
    scratch.perimeter.iter().all(|(a, b)| {
        let Some(&owner) = scratch.edge_faces.get(&(a, b)) else {
            return false;
        };
        let face = &faces[owner];
        let Some(i) = face.edges().iter().position(|&edge| edge == (a, b)) else {
            return false;
        };
        let opposite = point_at(face.indices[(i + 2) % 3]);
        Plane::new(apex, &point_at(a), &point_at(b))
            .map_or(false, |plane| plane.signed_distance(&opposite) < 0.0)
    })
}

/// Outcome of a single expansion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Growth {
    /// The candidate joined the hull.
    Grown,
    /// Replacing the visible faces would need more than `capacity` faces.
    /// Nothing was changed.
    OutOfStorage,
}

/// Grows the hull to include the candidate vertex.
///
/// The patch of faces visible from the candidate, grown from the face it is
/// furthest outside of, is replaced by a fan joining the candidate to the
/// boundary of the patch.
#[allow(clippy::too_many_arguments)]
pub(crate) fn expand<P, O>(
    points: &P,
    vertex_indices: &mut [usize],
    zones: &mut Zones,
    faces: &mut Vec<Face>,
    capacity: usize,
    epsilon: f64,
    candidate: Candidate,
    scratch: &mut ExpandScratch,
    observer: &mut O,
) -> Result<Growth, HullError>
where
    P: PointSource + ?Sized,
    O: HullObserver + ?Sized,
{
    let apex_point = points.point(vertex_indices[candidate.position]);
    let start = candidate.face;
    visible_region(faces, &apex_point, start, zones.hull_end, 0.0, scratch)?;
    if !fan_is_convex(points, vertex_indices, faces, &apex_point, scratch) {
        // Faces the apex is almost coplanar with can fold the fan; keep only
        // the ones it is clearly in front of.
        log::trace!("fan from vertex {} folds, regrowing", candidate.position);
        visible_region(faces, &apex_point, start, zones.hull_end, epsilon, scratch)?;
        if !fan_is_convex(points, vertex_indices, faces, &apex_point, scratch) {
            return Err(HullError::InternalError("new faces fold over the hull"));
        }
    }
    let ExpandScratch {
        visible, perimeter, ..
    } = scratch;

    if faces.len() - visible.len() + perimeter.len() > capacity {
        return Ok(Growth::OutOfStorage);
    }

    let apex = zones.promote(vertex_indices, candidate.position);
    observer.vertex_added(apex, vertex_indices[apex]);

    // Highest first, so every swap-remove pulls in a face that stays.
    visible.sort_unstable_by(|a, b| b.cmp(a));
    for &position in visible.iter() {
        let face = faces.swap_remove(position);
        observer.face_removed(position, &face);
    }

    for (a, b) in perimeter.iter() {
        let face = Face::new([apex, a, b], points, vertex_indices)
            .ok_or(HullError::InternalError("new face is degenerate"))?;
        faces.push(face);
        observer.face_added(faces.len() - 1, &face);
    }

    Ok(Growth::Grown)
}
