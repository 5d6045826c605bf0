use super::{Node, QuadTree};
use common::shapes::{Positionable, Rectangle};

impl<P: Positionable> QuadTree<P> {
    /// Collect references to every point within `center ± (x_range, y_range)`
    /// (closed region). Result order is unspecified.
    pub fn within<'a, C: Positionable>(
        &'a self,
        x_range: f32,
        y_range: f32,
        center: &C,
        results: &mut Vec<&'a P>,
    ) {
        self.within_with(x_range, y_range, center, |point| results.push(point));
    }

    /// Visitor variant of [`within`](Self::within); the caller chooses how
    /// results accumulate.
    pub fn within_with<'a, C, F>(&'a self, x_range: f32, y_range: f32, center: &C, mut f: F)
    where
        C: Positionable,
        F: FnMut(&'a P),
    {
        let region = Rectangle::new(
            center.x() - x_range,
            center.y() - y_range,
            center.x() + x_range,
            center.y() + y_range,
        );
        Self::within_node(&self.root, &region, &mut f);
    }

    fn within_node<'a, F>(node: &'a Node<P>, region: &Rectangle, f: &mut F)
    where
        F: FnMut(&'a P),
    {
        if let Some(children) = node.children.as_ref() {
            // Children whose box does not touch the region are skipped
            // wholesale; this pruning is the whole point of the index.
            for child in children.iter() {
                if child.bounds.overlaps(region) {
                    Self::within_node(child, region, f);
                }
            }
            return;
        }

        for bucket in node.buckets.iter() {
            for point in bucket.iter() {
                if region.contains(point) {
                    f(point);
                }
            }
        }
    }
}
