use crate::{Face, HullCounts};

/// Hooks invoked while a hull is being built.
///
/// Face positions are indices into the builder's live face list at the time
/// of the call; removal is a swap-remove, so a later face may take over the
/// position of a removed one.
///
/// Vertex positions can also be renumbered just before
/// [`finished`](HullObserver::finished): a hull vertex left without faces is
/// retired and the last hull vertex takes its place, which rewrites the
/// indices of the live faces without any `face_added` or `face_removed` call.
/// Observers mirroring the face list apply
/// [`vertex_retired`](HullObserver::vertex_retired) to keep up.
///
/// All methods default to doing nothing, and `()` is the observer used by
/// [`HullBuilder::build`](crate::HullBuilder::build).
pub trait HullObserver {
    /// A vertex entered the hull zone at `position`; it refers to point `index`.
    fn vertex_added(&mut self, _position: usize, _index: usize) {}

    fn face_added(&mut self, _position: usize, _face: &Face) {}

    fn face_removed(&mut self, _position: usize, _face: &Face) {}

    /// The hull vertex at `position` no longer belongs to any face and left the
    /// hull zone. Faces referring to `moved_from` now refer to `position`; the
    /// two are equal when the retired vertex was the last one.
    fn vertex_retired(&mut self, _position: usize, _moved_from: usize) {}

    /// The run ended, successfully or by exhausting face storage.
    fn finished(&mut self, _counts: HullCounts) {}
}

impl HullObserver for () {}

impl<O: HullObserver + ?Sized> HullObserver for &mut O {
    fn vertex_added(&mut self, position: usize, index: usize) {
        (**self).vertex_added(position, index)
    }

    fn face_added(&mut self, position: usize, face: &Face) {
        (**self).face_added(position, face)
    }

    fn face_removed(&mut self, position: usize, face: &Face) {
        (**self).face_removed(position, face)
    }

    fn vertex_retired(&mut self, position: usize, moved_from: usize) {
        (**self).vertex_retired(position, moved_from)
    }

    fn finished(&mut self, counts: HullCounts) {
        (**self).finished(counts)
    }
}

/// Writes every construction event to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl HullObserver for LogObserver {
    fn vertex_added(&mut self, position: usize, index: usize) {
        log::trace!("hull vertex {} -> point {}", position, index);
    }

    fn face_added(&mut self, position: usize, face: &Face) {
        log::trace!("+face {} {:?}", position, face.indices);
    }

    fn face_removed(&mut self, position: usize, face: &Face) {
        log::trace!("-face {} {:?}", position, face.indices);
    }

    fn vertex_retired(&mut self, position: usize, moved_from: usize) {
        log::trace!("retired hull vertex {}, renumbered {} -> {}", position, moved_from, position);
    }

    fn finished(&mut self, counts: HullCounts) {
        log::trace!("hull finished with {}", counts);
    }
}
