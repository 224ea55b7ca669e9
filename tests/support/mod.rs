#![allow(dead_code)]

pub mod points;

use std::collections::HashSet;

use hullkit::{HullCounts, Plane, Point};

/// Slack for points that were classified against older, smaller hulls.
pub const TOLERANCE: f64 = 1e-8;

/// Resolves face positions to point indices.
pub fn resolve(vertex_indices: &[usize], faces: &[[usize; 3]]) -> Vec<[usize; 3]> {
    faces
        .iter()
        .map(|face| face.map(|position| vertex_indices[position]))
        .collect()
}

/// Checks that `faces` form a closed, consistently wound 2-manifold of genus
/// zero whose vertices are exactly the positions `0..counts.vertex_count`.
pub fn assert_closed_manifold(faces: &[[usize; 3]], counts: HullCounts) {
    let faces = &faces[..counts.face_count];

    // Euler: V - E + F = 2 with E = 3F / 2.
    assert_eq!(counts.face_count % 2, 0);
    let edge_count = 3 * counts.face_count / 2;
    assert_eq!(
        counts.vertex_count as isize - edge_count as isize + counts.face_count as isize,
        2
    );

    // Every directed edge appears once and is matched by its mirror.
    let mut edges = HashSet::new();
    for &[a, b, c] in faces {
        for edge in [(a, b), (b, c), (c, a)] {
            assert!(edges.insert(edge), "edge {:?} repeated", edge);
        }
    }
    for &(a, b) in &edges {
        assert!(edges.contains(&(b, a)), "edge {:?} has no mirror", (a, b));
    }

    let mut used: Vec<usize> = faces.iter().flatten().copied().collect();
    used.sort_unstable();
    used.dedup();
    assert_eq!(used, (0..counts.vertex_count).collect::<Vec<_>>());
}

/// Checks that `faces` form a closed, consistently wound, convex surface over
/// exactly `vertex_indices[..counts.vertex_count]` that encloses `enclosed`.
pub fn assert_valid_hull(
    points: &[Point],
    vertex_indices: &[usize],
    faces: &[[usize; 3]],
    counts: HullCounts,
    enclosed: &[usize],
) {
    assert_closed_manifold(faces, counts);
    let faces = &faces[..counts.face_count];

    let hull_points: Vec<Point> = vertex_indices[..counts.vertex_count]
        .iter()
        .map(|&i| points[i])
        .collect();
    let centroid = hull_points
        .iter()
        .fold(Point::origin(), |acc, p| acc + p.coords / hull_points.len() as f64);

    for [a, b, c] in resolve(vertex_indices, faces) {
        let plane = Plane::new(&points[a], &points[b], &points[c]).expect("flat face");
        assert!(plane.signed_distance(&centroid) < 0.0, "inward facing face");
        for &i in enclosed {
            assert!(
                plane.signed_distance(&points[i]) <= TOLERANCE,
                "point {} outside face {:?}",
                i,
                [a, b, c]
            );
        }
    }
}
