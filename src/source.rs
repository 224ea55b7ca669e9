use crate::Point;

/// Read-only, indexable collection of points a hull is built over.
///
/// The builder never mutates the source; it only permutes the caller's
/// vertex index buffer, whose entries index into this collection.
pub trait PointSource {
    fn len(&self) -> usize;

    fn point(&self, index: usize) -> Point;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PointSource for [Point] {
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    fn point(&self, index: usize) -> Point {
        self[index]
    }
}

impl PointSource for Vec<Point> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn point(&self, index: usize) -> Point {
        self[index]
    }
}

impl PointSource for [[f64; 3]] {
    fn len(&self) -> usize {
        <[[f64; 3]]>::len(self)
    }

    fn point(&self, index: usize) -> Point {
        let [x, y, z] = self[index];
        Point::new(x, y, z)
    }
}

impl<P: PointSource + ?Sized> PointSource for &P {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn point(&self, index: usize) -> Point {
        (**self).point(index)
    }
}
