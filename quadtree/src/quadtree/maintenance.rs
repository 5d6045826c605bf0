use super::QuadTree;
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Positionable;

impl<P: Positionable + PartialEq> QuadTree<P> {
    /// Remove a previously inserted point. Equality is the caller's
    /// `PartialEq`; the default `Point` compares coordinates, and a caller
    /// type carrying an id compares identity through its own impl.
    ///
    /// Under-full siblings are never merged back into their parent:
    /// subdivision is permanent.
    pub fn delete(&mut self, point: &P) -> QuadtreeResult<()> {
        if self.root.remove(point) {
            self.len -= 1;
            Ok(())
        } else {
            Err(QuadtreeError::NotFound {
                x: point.x(),
                y: point.y(),
            })
        }
    }
}
