// Copyright (c) 2025 Kumu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Tree: prefix trees and generalized suffix trees with optional
//! radix-style path compression.
//!
//! A `LanaiTree` stores string keys one symbol per edge. With compression
//! enabled, chains of single-child, non-terminal nodes are collapsed into a
//! single edge carrying the whole symbol run (a PATRICIA-style trie). The
//! same structure doubles as a naive generalized suffix tree when built from
//! every suffix of the input words.
//!
//! # Features
//!
//! - Trie and suffix-tree construction from any list of strings.
//! - One-shot bulk compression that never changes the accepted key set.
//! - Incremental suffix insertion that keeps compressed labels consistent.
//! - Label-aware search returning the number of edges traversed.
//! - Prefix enumeration and substring containment queries.
//!
//! # Example
//!
//! ```
//! use kumu_lib::data_structures::lanai_tree::{LanaiTree, LanaiTreeConfig};
//!
//! let mut trie = LanaiTree::new();
//! trie.construct_trie_from_text(["cat", "car", "dog"])?;
//!
//! // One edge per symbol
//! assert_eq!(trie.search_and_get_depth("car"), 3);
//! // "ca" is on a path but is not a stored key
//! assert_eq!(trie.search_and_get_depth("ca"), -1);
//!
//! let mut radix = LanaiTree::with_config(LanaiTreeConfig::new().with_compressed(true));
//! radix.construct_trie_from_text(["cat", "car", "dog"])?;
//!
//! // "dog" shares no branch point and collapses into one edge
//! assert_eq!(radix.search_and_get_depth("dog"), 1);
//! assert_eq!(radix.search_and_get_depth("car"), 2);
//! # Ok::<(), kumu_lib::data_structures::lanai_tree::LanaiTreeError>(())
//! ```
//!
//! # Performance Characteristics
//!
//! - Trie construction: O(total key length)
//! - Suffix-tree construction: O(n²) per word of length n, no suffix links
//! - Compression: O(number of nodes)
//! - Search: O(key length), one hash lookup and one label comparison per edge

mod build;
mod compress;
mod config;
mod error;
mod node;
mod search;

#[cfg(test)]
mod tests;

pub use config::{LanaiTreeConfig, DEFAULT_MAX_KEY_LEN};
pub use error::{LanaiTreeError, LanaiTreeResult};
pub use node::TreeNode;
pub use search::NOT_FOUND;

/// Which construction last populated the tree.
///
/// Kept for introspection only; search and compression behave the same for
/// both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeKind {
    /// Whole words were inserted
    #[default]
    Trie,
    /// Every suffix of every word was inserted
    SuffixTree,
}

/// Structural summary of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Number of nodes, excluding the root
    pub nodes: usize,
    /// Number of terminal nodes, i.e. stored keys
    pub keys: usize,
    /// Non-root, non-terminal nodes with exactly one child
    pub chain_nodes: usize,
    /// Largest number of edges from the root to any node
    pub max_depth: usize,
    /// Longest edge label, in symbols
    pub max_label_len: usize,
}

/// Lanai Tree is a prefix tree over string keys that can also serve as a
/// generalized suffix tree.
///
/// Key features:
/// * Children are keyed by the first symbol of their edge label
/// * Edge labels may span several symbols once compressed
/// * Absence is reported as a sentinel depth rather than an error
#[derive(Debug, Default)]
pub struct LanaiTree {
    /// The root node of the tree
    root: TreeNode,

    /// Which construction last touched the tree
    kind: TreeKind,

    /// Configuration options
    config: LanaiTreeConfig,
}

impl LanaiTree {
    /// Creates a new empty, uncompressed `LanaiTree`.
    pub fn new() -> Self {
        Self::with_config(LanaiTreeConfig::default())
    }

    /// Creates a new empty `LanaiTree` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the tree.
    pub fn with_config(config: LanaiTreeConfig) -> Self {
        Self {
            root: TreeNode::new(),
            kind: TreeKind::default(),
            config,
        }
    }

    /// Whether bulk construction compresses the tree.
    pub fn is_compressed(&self) -> bool {
        self.config.is_compressed()
    }

    /// Which construction last populated the tree.
    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// The configuration this tree was created with.
    pub fn config(&self) -> &LanaiTreeConfig {
        &self.config
    }

    /// Read-only access to the root node.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Returns the number of keys stored in the tree.
    ///
    /// This requires traversing the entire tree, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.stats().keys
    }

    /// Checks if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Returns the number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.stats().nodes
    }

    /// Collects structural statistics in a single traversal.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut stack: Vec<(&TreeNode, usize)> =
            self.root.children.values().map(|child| (child, 1)).collect();

        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            if node.is_terminal {
                stats.keys += 1;
            }
            if node.is_chain() {
                stats.chain_nodes += 1;
            }
            stats.max_depth = stats.max_depth.max(depth);
            stats.max_label_len = stats.max_label_len.max(node.label.chars().count());

            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }

        stats
    }

    /// Removes every key, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = TreeNode::new();
        self.kind = TreeKind::default();
    }
}
