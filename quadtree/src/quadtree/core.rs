use super::{Config, Node, QuadTree};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Positionable, Rectangle};

impl<P: Positionable> QuadTree<P> {
    pub fn new(division_limit: usize, max_x: f32, max_y: f32) -> QuadtreeResult<Self> {
        Self::new_with_config(Config {
            division_limit,
            max_x,
            max_y,
        })
    }

    pub fn new_with_config(config: Config) -> QuadtreeResult<Self> {
        config.validate()?;
        let mut root = Node::new(Rectangle::new(
            -config.max_x,
            -config.max_y,
            config.max_x,
            config.max_y,
        ));
        // The top-level quartering happens unconditionally at construction,
        // independent of the division limit: even an empty tree starts with
        // the four world quadrants.
        root.split(config.division_limit);
        Ok(QuadTree {
            root,
            config,
            len: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of points currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store a point. Bounds are validated before anything is touched, so a
    /// rejected insert leaves the tree exactly as it was.
    pub fn insert(&mut self, point: P) -> QuadtreeResult<()> {
        let x = point.x();
        let y = point.y();
        if !x.is_finite()
            || !y.is_finite()
            || x < -self.config.max_x
            || x > self.config.max_x
            || y < -self.config.max_y
            || y > self.config.max_y
        {
            return Err(QuadtreeError::OutOfBounds {
                x,
                y,
                max_x: self.config.max_x,
                max_y: self.config.max_y,
            });
        }

        self.root.insert(point, self.config.division_limit);
        self.len += 1;
        Ok(())
    }

    /// Collect references to every stored point, quadrant-then-insertion
    /// order. The order is an implementation detail.
    pub fn all_points<'a>(&'a self, points: &mut Vec<&'a P>) {
        Self::points_from(&self.root, points);
    }

    fn points_from<'a>(node: &'a Node<P>, points: &mut Vec<&'a P>) {
        if let Some(children) = node.children.as_ref() {
            for child in children.iter() {
                Self::points_from(child, points);
            }
            return;
        }
        for bucket in node.buckets.iter() {
            points.extend(bucket.iter());
        }
    }

    /// Collect the bounding box of every node, parents before children.
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        Self::node_bounding_boxes(&self.root, bounding_boxes);
    }

    fn node_bounding_boxes(node: &Node<P>, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.push(node.bounds);
        if let Some(children) = node.children.as_ref() {
            for child in children.iter() {
                Self::node_bounding_boxes(child, bounding_boxes);
            }
        }
    }
}
