//! Point quadtree over a fixed, origin-centered world.
//!
//! Single-owner and single-threaded: operations take `&mut self` or `&self`
//! with no internal synchronization, so sharing a tree across threads
//! requires external locking at the handle.

pub mod error;
pub mod quadtree;

pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, QuadTree};
