/// Two cursors splitting the vertex index buffer into three contiguous zones:
///
/// - `[0, hull_end)`: confirmed hull vertices
/// - `[hull_end, interior_start)`: not yet classified
/// - `[interior_start, len)`: confirmed interior
///
/// Zones only change by swapping entries, so the buffer stays a permutation of
/// what the caller passed in. Hull positions never move while the hull grows,
/// which is what lets faces refer to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Zones {
    pub hull_end: usize,
    pub interior_start: usize,
}

impl Zones {
    /// Every vertex starts out unclassified.
    pub fn new(len: usize) -> Self {
        Self {
            hull_end: 0,
            interior_start: len,
        }
    }

    pub fn unclassified(&self) -> std::ops::Range<usize> {
        self.hull_end..self.interior_start
    }

    /// Moves the unclassified vertex at `position` to the end of the hull zone
    /// and returns its new position.
    pub fn promote(&mut self, indices: &mut [usize], position: usize) -> usize {
        debug_assert!(self.unclassified().contains(&position));
        let slot = self.hull_end;
        indices.swap(position, slot);
        self.hull_end += 1;
        slot
    }

    /// Moves the unclassified vertex at `position` to the front of the interior
    /// zone. The vertex that was last in the unclassified zone takes its place.
    pub fn demote(&mut self, indices: &mut [usize], position: usize) {
        debug_assert!(self.unclassified().contains(&position));
        self.interior_start -= 1;
        indices.swap(position, self.interior_start);
    }

    /// Moves the hull vertex at `position` into the interior zone.
    ///
    /// The last hull vertex is moved into `position`; its old position is
    /// returned so that faces referring to it can be renumbered.
    pub fn retire(&mut self, indices: &mut [usize], position: usize) -> usize {
        debug_assert!(position < self.hull_end);
        let last = self.hull_end - 1;
        indices.swap(position, last);
        self.hull_end = last;
        self.demote(indices, last);
        last
    }
}
