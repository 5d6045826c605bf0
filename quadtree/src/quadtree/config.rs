use crate::error::{QuadtreeError, QuadtreeResult};

#[derive(Debug, Clone)]
pub struct Config {
    /// Number of points a leaf holds when it must split.
    pub division_limit: usize,
    /// World half-extent along x; the world spans [-max_x, max_x].
    pub max_x: f32,
    /// World half-extent along y; the world spans [-max_y, max_y].
    pub max_y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            division_limit: 4,
            max_x: 100.0,
            max_y: 100.0,
        }
    }
}

impl Config {
    pub(crate) fn validate(&self) -> QuadtreeResult<()> {
        if self.division_limit < 1
            || !self.max_x.is_finite()
            || self.max_x <= 0.0
            || !self.max_y.is_finite()
            || self.max_y <= 0.0
        {
            return Err(QuadtreeError::InvalidConfiguration {
                division_limit: self.division_limit,
                max_x: self.max_x,
                max_y: self.max_y,
            });
        }
        Ok(())
    }
}
