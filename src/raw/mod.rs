mod arena;
mod balance;
mod handle;
mod node;
mod raw_llrb_tree;

pub(crate) use arena::Arena;
pub(crate) use handle::Handle;
pub(crate) use node::{Dir, Node, Values};
pub(crate) use raw_llrb_tree::RawLlrbTree;
