use rand::Rng;

/// Capability required of stored values: expose a 2D position.
/// The index never inspects anything else about the value.
pub trait Positionable {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
}

// Allow callers to store references instead of owned values.
impl<'a, T: Positionable> Positionable for &'a T {
    fn x(&self) -> f32 {
        (**self).x()
    }

    fn y(&self) -> f32 {
        (**self).y()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Positionable for Point {
    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }
}

/// Closed axis-aligned rectangle given by its bottom-left and top-right
/// corners. Both edges belong to the rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rectangle {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    // Midpoints are anchored on the positive-side corner whenever the lower
    // bound is not positive, so boxes mirrored around the origin get exactly
    // mirrored midpoints. Insertion, splitting, and containment all go
    // through these two functions; no caller recomputes a midpoint itself.
    pub fn mid_x(&self) -> f32 {
        if self.min_x > 0.0 {
            (self.max_x - self.min_x) / 2.0 + self.min_x
        } else {
            self.max_x + (self.min_x - self.max_x) / 2.0
        }
    }

    pub fn mid_y(&self) -> f32 {
        if self.min_y > 0.0 {
            (self.max_y - self.min_y) / 2.0 + self.min_y
        } else {
            self.max_y + (self.min_y - self.max_y) / 2.0
        }
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.min_y <= y && self.max_y >= y && self.min_x <= x && self.max_x >= x
    }

    pub fn contains(&self, p: &impl Positionable) -> bool {
        self.contains_point(p.x(), p.y())
    }

    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.gen_range(self.min_x..=self.max_x),
            rng.gen_range(self.min_y..=self.max_y),
        )
    }
}
