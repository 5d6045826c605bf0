use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidConfiguration {
        division_limit: usize,
        max_x: f32,
        max_y: f32,
    },
    OutOfBounds {
        x: f32,
        y: f32,
        max_x: f32,
        max_y: f32,
    },
    NotFound {
        x: f32,
        y: f32,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidConfiguration {
                division_limit,
                max_x,
                max_y,
            } => {
                write!(
                    f,
                    "division limit must be at least 1 and world extents finite and positive (division_limit: {}, max_x: {}, max_y: {})",
                    division_limit, max_x, max_y
                )
            }
            QuadtreeError::OutOfBounds { x, y, max_x, max_y } => {
                write!(
                    f,
                    "point must have finite coordinates within world extents (x: {}, y: {}, max_x: {}, max_y: {})",
                    x, y, max_x, max_y
                )
            }
            QuadtreeError::NotFound { x, y } => {
                write!(f, "no matching point stored at (x: {}, y: {})", x, y)
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
