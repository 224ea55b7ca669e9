use crate::{zones::Zones, Degeneracy, Face, HullError, Point, PointSource};

/// Faces of the seed tetrahedron over hull positions `0..4`, for the case where
/// the fourth vertex lies on the positive side of triangle `(0, 1, 2)`.
const SEED_FACES: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];

/// Picks four extremal, affinely independent points, moves them to the front of
/// the hull zone and pushes the four outward-facing faces of their tetrahedron.
///
/// Expects every vertex to be unclassified and `faces` to be empty.
pub(crate) fn init_tetrahedron<P: PointSource + ?Sized>(
    points: &P,
    vertex_indices: &mut [usize],
    zones: &mut Zones,
    epsilon: f64,
    faces: &mut Vec<Face>,
) -> Result<(), HullError> {
    let candidates = zones.unclassified();
    let point_at = |position: usize| points.point(vertex_indices[position]);

    // The two points furthest apart along the axis of largest extent.
    let (a, b) = (0..3)
        .filter_map(|axis| {
            let coord = |position: &usize| point_at(*position)[axis];
            let min = candidates
                .clone()
                .min_by(|i, j| coord(i).total_cmp(&coord(j)))?;
            let max = candidates
                .clone()
                .max_by(|i, j| coord(i).total_cmp(&coord(j)))?;
            Some((coord(&max) - coord(&min), min, max))
        })
        .max_by(|x, y| x.0.total_cmp(&y.0))
        .filter(|(extent, _, _)| *extent > epsilon)
        .map(|(_, min, max)| (min, max))
        .ok_or(HullError::Degenerate(Degeneracy::Coincident))?;

    let pa = point_at(a);
    let direction = (point_at(b) - pa).normalize();

    // The point furthest from the line through `a` and `b`.
    let (c, _) = furthest(candidates.clone(), |position| {
        (point_at(position) - pa).cross(&direction).norm()
    })
    .filter(|(_, distance)| *distance > epsilon)
    .ok_or(HullError::Degenerate(Degeneracy::Collinear))?;

    // The point furthest from the plane through `a`, `b` and `c`.
    let axis = direction.cross(&(point_at(c) - pa)).normalize();
    let (d, side) = furthest(candidates, |position| {
        axis.dot(&(point_at(position) - pa)).abs()
    })
    .filter(|(_, distance)| *distance > epsilon)
    .map(|(position, _)| (position, axis.dot(&(point_at(position) - pa))))
    .ok_or(HullError::Degenerate(Degeneracy::Coplanar))?;
    let flip = side > 0.0;

    let mut chosen = [a, b, c, d];
    for slot in 0..chosen.len() {
        let position = chosen[slot];
        zones.promote(vertex_indices, position);
        for later in chosen[slot + 1..].iter_mut() {
            if *later == slot {
                *later = position;
            }
        }
    }

    for (opposite, mut indices) in [3, 2, 0, 1].into_iter().zip(SEED_FACES) {
        if !flip {
            indices.swap(1, 2);
        }
        let face = Face::new(indices, points, vertex_indices)
            .ok_or(HullError::InternalError("seed tetrahedron has a flat face"))?;
        let apex: Point = points.point(vertex_indices[opposite]);
        if face.signed_distance(&apex) > 0.0 {
            return Err(HullError::InternalError("seed tetrahedron is inside out"));
        }
        faces.push(face);
    }

    Ok(())
}

fn furthest(
    positions: std::ops::Range<usize>,
    distance: impl Fn(usize) -> f64,
) -> Option<(usize, f64)> {
    positions
        .map(|position| (position, distance(position)))
        .max_by(|x, y| x.1.total_cmp(&y.1))
}
