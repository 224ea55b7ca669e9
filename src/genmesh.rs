use genmesh::{
    generators::{IndexedPolygon, SharedVertex},
    Polygon, Triangle, Vertex,
};

use crate::{ConvexHull, Face};

/// Flat-shaded triangle mesh of a [`ConvexHull`].
///
/// Every face gets its own three vertices carrying the face normal, so shared
/// vertex `i` is corner `i % 3` of face `i / 3`.
pub struct ConvexHullMeshGenerator<'a> {
    parent: &'a ConvexHull,
    face: usize,
}

impl<'a> ConvexHullMeshGenerator<'a> {
    pub fn new(parent: &'a ConvexHull) -> Self {
        Self { parent, face: 0 }
    }

    fn corner(&self, face: &Face, corner: usize) -> Vertex {
        let (p, _) = self.parent.vertices()[face.indices[corner]];
        let n = face.plane.normal();
        Vertex {
            pos: [p.x as f32, p.y as f32, p.z as f32].into(),
            normal: [n.x as f32, n.y as f32, n.z as f32].into(),
        }
    }
}

impl Iterator for ConvexHullMeshGenerator<'_> {
    type Item = Polygon<Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let face = self.parent.faces().get(self.face)?;
        self.face += 1;
        Some(Polygon::PolyTri(Triangle::new(
            self.corner(face, 0),
            self.corner(face, 1),
            self.corner(face, 2),
        )))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.parent.faces().len() - self.face;
        (remaining, Some(remaining))
    }
}

impl SharedVertex<Vertex> for ConvexHullMeshGenerator<'_> {
    fn shared_vertex(&self, idx: usize) -> Vertex {
        let face = &self.parent.faces()[idx / 3];
        self.corner(face, idx % 3)
    }

    fn shared_vertex_count(&self) -> usize {
        self.parent.faces().len() * 3
    }
}

impl IndexedPolygon<Triangle<usize>> for ConvexHullMeshGenerator<'_> {
    fn indexed_polygon(&self, idx: usize) -> Triangle<usize> {
        let idx = idx * 3;
        Triangle::new(idx, idx + 1, idx + 2)
    }

    fn indexed_polygon_count(&self) -> usize {
        self.parent.faces().len()
    }
}
