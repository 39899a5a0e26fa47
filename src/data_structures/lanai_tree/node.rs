// Copyright (c) 2025 Kumu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Tree.
//!
//! Nodes are the fundamental building blocks of the tree. Each node owns its
//! children outright, keyed by the first symbol of the child's edge label.

use std::fmt;

use hashbrown::HashMap;

/// A node in the Lanai Tree.
///
/// The `label` is the run of symbols consumed on the edge from the parent to
/// this node. It holds a single symbol in an uncompressed tree and may hold
/// several after compression. Only the root has an empty label.
///
/// Dropping and formatting never recurse, so an uncompressed chain as deep
/// as the longest accepted key is released without exhausting the stack.
#[derive(Default)]
pub struct TreeNode {
    /// Symbols on the incoming edge
    pub label: String,

    /// Children keyed by the first symbol of their label
    pub children: HashMap<char, TreeNode>,

    /// Whether a complete key ends at this node
    pub is_terminal: bool,
}

impl TreeNode {
    /// Creates a new empty node, as used for the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a non-terminal leaf with the given edge label.
    pub(crate) fn with_label<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            children: HashMap::new(),
            is_terminal: false,
        }
    }

    /// First symbol of the label, the key this node is stored under in its parent.
    pub fn first_symbol(&self) -> Option<char> {
        self.label.chars().next()
    }

    /// Whether this node is a non-terminal with exactly one child.
    pub fn is_chain(&self) -> bool {
        self.children.len() == 1 && !self.is_terminal
    }

    /// Absorbs the only child into this node.
    ///
    /// The child's label is appended to ours, its children replace ours and
    /// its terminal flag becomes ours. Returns `false` without touching the
    /// node if it is not a chain node.
    pub(crate) fn absorb_only_child(&mut self) -> bool {
        if !self.is_chain() {
            return false;
        }

        let Some((_, mut child)) = self.children.drain().next() else {
            return false;
        };

        self.label.push_str(&child.label);
        self.children = std::mem::take(&mut child.children);
        self.is_terminal = child.is_terminal;
        true
    }

    /// Splits this node's label after `at` bytes.
    ///
    /// The node keeps the head of the label and gets a single child that
    /// carries the tail along with the node's former children and terminal
    /// flag. Returns `false` without touching the node unless `at` lies on
    /// a char boundary strictly inside the label, so no empty label is made.
    pub(crate) fn split_label(&mut self, at: usize) -> bool {
        if at == 0 || at >= self.label.len() || !self.label.is_char_boundary(at) {
            return false;
        }

        let tail = TreeNode {
            label: self.label.split_off(at),
            children: std::mem::take(&mut self.children),
            is_terminal: self.is_terminal,
        };
        self.is_terminal = false;

        if let Some(symbol) = tail.first_symbol() {
            self.children.insert(symbol, tail);
        }
        true
    }

    /// Returns the child whose label starts with `symbol`, creating a
    /// single-symbol child if there is none.
    pub(crate) fn child_or_insert(&mut self, symbol: char) -> &mut TreeNode {
        self.children
            .entry(symbol)
            .or_insert_with(|| TreeNode::with_label(symbol))
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Detach descendants onto a heap stack; each popped node is dropped
        // with no children left, so drop glue stays one level deep
        let mut stack: Vec<TreeNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

// Children are summarized by their keys rather than formatted recursively.
impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut symbols: Vec<char> = self.children.keys().copied().collect();
        symbols.sort_unstable();

        f.debug_struct("TreeNode")
            .field("label", &self.label)
            .field("children", &symbols)
            .field("is_terminal", &self.is_terminal)
            .finish()
    }
}
