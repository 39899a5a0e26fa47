//! Data structures for Kumu.
//!
//! Currently this is the Lanai Tree, a prefix tree that can also act as a
//! naive generalized suffix tree and supports radix-style compression.

pub mod lanai_tree;

// Re-export common data structures
pub use lanai_tree::{LanaiTree, LanaiTreeConfig, LanaiTreeError, LanaiTreeResult};
