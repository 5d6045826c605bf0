mod config;
mod core;
mod maintenance;
mod node;
mod query_rect;

pub use config::Config;

pub(crate) use node::Node;

/// Handle owning the root node and the configuration fixed at construction.
///
/// `P` is any caller type exposing a position; the tree stores the values it
/// is given (which may themselves be references) and never copies anything
/// beyond what placement needs.
pub struct QuadTree<P> {
    root: Node<P>,
    config: Config,
    len: usize,
}
