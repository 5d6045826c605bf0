use common::shapes::{Positionable, Rectangle};
use smallvec::SmallVec;

// Inline capacity matches the default division limit, so leaves only spill
// to the heap when the limit is raised.
pub(crate) type Bucket<P> = SmallVec<[P; 4]>;

/// A node is either a leaf (no children, points partitioned into four
/// buckets by the quadrant they would fall into after a split) or internal
/// (exactly four children, no points). Splitting is one-way.
pub(crate) struct Node<P> {
    pub(crate) bounds: Rectangle,
    pub(crate) children: Option<Box<[Node<P>; 4]>>,
    pub(crate) buckets: [Bucket<P>; 4],
    pub(crate) len: usize,
}

impl<P: Positionable> Node<P> {
    pub(crate) fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            children: None,
            buckets: [
                Bucket::new(),
                Bucket::new(),
                Bucket::new(),
                Bucket::new(),
            ],
            len: 0,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Quadrant layout relative to (mid_x, mid_y):
    ///   0 top-right, 1 top-left, 2 bottom-left, 3 bottom-right.
    /// Points exactly on a midline resolve to the `>=` side (0/3 across the
    /// x midline, 0/1 across the y midline). This single function decides
    /// placement for bucketing, descent, split redistribution, and removal,
    /// so a stored point is always found in exactly one place.
    pub(crate) fn quadrant_of(mid_x: f32, mid_y: f32, x: f32, y: f32) -> usize {
        if x >= mid_x {
            if y >= mid_y {
                0
            } else {
                3
            }
        } else if y >= mid_y {
            1
        } else {
            2
        }
    }

    pub(crate) fn quadrant_bounds(&self, quadrant: usize) -> Rectangle {
        let mid_x = self.bounds.mid_x();
        let mid_y = self.bounds.mid_y();
        match quadrant {
            0 => Rectangle::new(mid_x, mid_y, self.bounds.max_x, self.bounds.max_y),
            1 => Rectangle::new(self.bounds.min_x, mid_y, mid_x, self.bounds.max_y),
            2 => Rectangle::new(self.bounds.min_x, self.bounds.min_y, mid_x, mid_y),
            _ => Rectangle::new(mid_x, self.bounds.min_y, self.bounds.max_x, mid_y),
        }
    }

    /// Caller guarantees the point lies within this node's bounds.
    pub(crate) fn insert(&mut self, point: P, division_limit: usize) {
        debug_assert!(self.bounds.contains(&point));
        let quadrant = Self::quadrant_of(
            self.bounds.mid_x(),
            self.bounds.mid_y(),
            point.x(),
            point.y(),
        );

        if let Some(children) = self.children.as_mut() {
            children[quadrant].insert(point, division_limit);
            return;
        }

        self.buckets[quadrant].push(point);
        self.len += 1;

        // Strictly at the limit, never above it, so inserts into a node that
        // already split do not re-trigger. Degenerate boxes (a midline that
        // no longer falls strictly inside the bounds) stay overfull leaves
        // rather than subdividing forever on coincident points.
        if self.len == division_limit && self.can_split() {
            self.split(division_limit);
        }
    }

    fn can_split(&self) -> bool {
        let mid_x = self.bounds.mid_x();
        let mid_y = self.bounds.mid_y();
        mid_x > self.bounds.min_x
            && mid_x < self.bounds.max_x
            && mid_y > self.bounds.min_y
            && mid_y < self.bounds.max_y
    }

    /// One-way transition from leaf to internal: quarter the bounds along
    /// the quadrant layout, then push each bucket down into the child
    /// occupying the same quadrant. The buckets were pre-sorted against this
    /// node's midpoint, which is exactly the boundary the children quarter
    /// along, so no point needs re-testing here. A child receiving a whole
    /// bucket at or past the limit splits in turn.
    pub(crate) fn split(&mut self, division_limit: usize) {
        debug_assert!(self.is_leaf());
        let quads = Box::new([
            Node::new(self.quadrant_bounds(0)),
            Node::new(self.quadrant_bounds(1)),
            Node::new(self.quadrant_bounds(2)),
            Node::new(self.quadrant_bounds(3)),
        ]);
        let children = self.children.insert(quads);

        for (quadrant, bucket) in self.buckets.iter_mut().enumerate() {
            for point in bucket.drain(..) {
                children[quadrant].insert(point, division_limit);
            }
        }
        self.len = 0;
    }

    /// Descend to the leaf covering the point's position and remove the
    /// first stored value comparing equal to it.
    pub(crate) fn remove(&mut self, point: &P) -> bool
    where
        P: PartialEq,
    {
        let quadrant = Self::quadrant_of(
            self.bounds.mid_x(),
            self.bounds.mid_y(),
            point.x(),
            point.y(),
        );

        if let Some(children) = self.children.as_mut() {
            return children[quadrant].remove(point);
        }

        let bucket = &mut self.buckets[quadrant];
        match bucket.iter().position(|stored| stored == point) {
            Some(index) => {
                bucket.remove(index);
                self.len -= 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::shapes::Point;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn quadrant_assignment_matches_child_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let min_x = rng.gen_range(-1000.0..1000.0);
            let min_y = rng.gen_range(-1000.0..1000.0);
            let bounds = Rectangle::new(
                min_x,
                min_y,
                min_x + rng.gen_range(1.0..500.0),
                min_y + rng.gen_range(1.0..500.0),
            );
            let node: Node<Point> = Node::new(bounds);
            for _ in 0..50 {
                let point = bounds.random_point_inside(&mut rng);
                let quadrant = Node::<Point>::quadrant_of(
                    bounds.mid_x(),
                    bounds.mid_y(),
                    point.x,
                    point.y,
                );
                // The assigned quadrant's box covers the point, and the four
                // boxes cover the parent with no gaps.
                assert!(node.quadrant_bounds(quadrant).contains(&point));
                let covering = (0..4)
                    .filter(|&q| node.quadrant_bounds(q).contains(&point))
                    .count();
                assert!(covering >= 1);
            }
        }
    }

    #[test]
    fn quadrant_midline_ties_resolve_to_greater_side() {
        // Midlines of a world box symmetric around zero sit exactly at 0.
        let mid_x = 0.0;
        let mid_y = 0.0;
        assert_eq!(Node::<Point>::quadrant_of(mid_x, mid_y, 0.0, 5.0), 0);
        assert_eq!(Node::<Point>::quadrant_of(mid_x, mid_y, 0.0, -5.0), 3);
        assert_eq!(Node::<Point>::quadrant_of(mid_x, mid_y, 5.0, 0.0), 0);
        assert_eq!(Node::<Point>::quadrant_of(mid_x, mid_y, -5.0, 0.0), 1);
        assert_eq!(Node::<Point>::quadrant_of(mid_x, mid_y, 0.0, 0.0), 0);
    }

    #[test]
    fn quadrant_bounds_quarter_the_parent() {
        let node: Node<Point> = Node::new(Rectangle::new(-100.0, -100.0, 100.0, 100.0));
        assert_eq!(node.quadrant_bounds(0), Rectangle::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(node.quadrant_bounds(1), Rectangle::new(-100.0, 0.0, 0.0, 100.0));
        assert_eq!(
            node.quadrant_bounds(2),
            Rectangle::new(-100.0, -100.0, 0.0, 0.0)
        );
        assert_eq!(
            node.quadrant_bounds(3),
            Rectangle::new(0.0, -100.0, 100.0, 0.0)
        );
    }

    #[test]
    fn split_empties_node_and_preserves_count() {
        let mut node = Node::new(Rectangle::new(0.0, 0.0, 100.0, 100.0));
        let points = [
            Point::new(10.0, 10.0),
            Point::new(90.0, 90.0),
            Point::new(10.0, 90.0),
        ];
        for point in points {
            node.insert(point, 10);
        }
        assert!(node.is_leaf());
        assert_eq!(node.len, 3);

        node.split(10);
        assert!(!node.is_leaf());
        assert_eq!(node.len, 0);
        let children = node.children.as_ref().unwrap();
        let total: usize = children.iter().map(|child| child.len).sum();
        assert_eq!(total, points.len());
    }

    #[test]
    fn insert_splits_exactly_at_limit() {
        let mut node = Node::new(Rectangle::new(0.0, 0.0, 100.0, 100.0));
        node.insert(Point::new(60.0, 60.0), 3);
        node.insert(Point::new(70.0, 70.0), 3);
        assert!(node.is_leaf());
        node.insert(Point::new(80.0, 80.0), 3);
        assert!(!node.is_leaf());
    }

    #[test]
    fn coincident_points_do_not_subdivide_forever() {
        let mut node = Node::new(Rectangle::new(0.0, 0.0, 100.0, 100.0));
        for _ in 0..6 {
            node.insert(Point::new(25.0, 25.0), 2);
        }
        let mut removed = 0;
        let target = Point::new(25.0, 25.0);
        while node.remove(&target) {
            removed += 1;
        }
        assert_eq!(removed, 6);
    }

    #[test]
    fn remove_descends_to_the_covering_leaf() {
        let mut node = Node::new(Rectangle::new(-100.0, -100.0, 100.0, 100.0));
        for i in 0..8 {
            node.insert(Point::new(i as f32 * 10.0 - 40.0, 5.0), 4);
        }
        assert!(node.remove(&Point::new(-40.0, 5.0)));
        assert!(!node.remove(&Point::new(-40.0, 5.0)));
        assert!(node.remove(&Point::new(30.0, 5.0)));
    }
}
