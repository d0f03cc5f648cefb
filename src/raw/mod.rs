mod handle;
mod node;
mod raw_tree;
mod slab;

pub(crate) use handle::Handle;
pub(crate) use node::{Node, Side};
pub(crate) use raw_tree::RawTree;
