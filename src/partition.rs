use crate::{zones::Zones, Face, PointSource};

/// The unclassified vertex furthest outside the current hull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    /// Position of the vertex in the index buffer.
    pub position: usize,
    /// Largest signed distance to any face plane.
    pub distance: f64,
    /// Position of the face that distance was measured to.
    pub face: usize,
}

/// Reclassifies every unclassified vertex against the live faces.
///
/// Vertices within `epsilon` of the inner side of every plane are moved to the
/// interior zone. Of the rest, the one with the largest distance to any plane is
/// returned along with the face it is furthest in front of. Returns `None` once
/// nothing remains outside the hull.
pub(crate) fn partition<P: PointSource + ?Sized>(
    points: &P,
    vertex_indices: &mut [usize],
    zones: &mut Zones,
    faces: &[Face],
    epsilon: f64,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    let mut position = zones.hull_end;
    while position < zones.interior_start {
        let point = points.point(vertex_indices[position]);

        let mut distance = f64::NEG_INFINITY;
        let mut furthest = 0;
        for (face_position, face) in faces.iter().enumerate() {
            let d = face.signed_distance(&point);
            if d > distance {
                distance = d;
                furthest = face_position;
            }
        }

        if distance <= epsilon {
            // The vertex swapped in from the far end is examined next.
            zones.demote(vertex_indices, position);
            continue;
        }

        if best.map_or(true, |best| distance > best.distance) {
            best = Some(Candidate {
                position,
                distance,
                face: furthest,
            });
        }
        position += 1;
    }

    best
}
