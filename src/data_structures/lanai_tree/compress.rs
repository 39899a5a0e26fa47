// Copyright (c) 2025 Kumu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Chain compression.

use tracing::debug;

use super::node::TreeNode;
use super::LanaiTree;

impl LanaiTree {
    /// Collapses every chain of single-child, non-terminal nodes into one
    /// edge labeled with the concatenated symbol run.
    ///
    /// The root is never collapsed, and a terminal node always ends a merge
    /// so that "key ends here" stays distinguishable from "key continues".
    /// Nodes are rewritten in place, so the parent's map entry for a node
    /// remains valid across every merge. Running it twice is a no-op.
    ///
    /// # Returns
    ///
    /// The number of nodes that were merged away.
    pub fn compress(&mut self) -> usize {
        let merged = compress_below(&mut self.root);
        debug!(merged, "Compressed tree");
        merged
    }
}

/// Compresses the subtree under `root` without collapsing `root` itself.
fn compress_below(root: &mut TreeNode) -> usize {
    let mut merged = 0;
    // Explicit stack: depth is bounded only by the longest key
    let mut stack: Vec<&mut TreeNode> = root.children.values_mut().collect();

    while let Some(node) = stack.pop() {
        while node.absorb_only_child() {
            merged += 1;
        }
        stack.extend(node.children.values_mut());
    }

    merged
}
