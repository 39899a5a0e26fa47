// Copyright (c) 2025 Kumu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Label-aware lookups over compressed and uncompressed trees.

use super::node::TreeNode;
use super::LanaiTree;

/// Depth reported by [`LanaiTree::search_and_get_depth`] for absent keys.
pub const NOT_FOUND: i64 = -1;

impl LanaiTree {
    /// Searches for a complete key and returns the number of edges on its path.
    ///
    /// The child is looked up by the next symbol of the key, then its whole
    /// label must be a prefix of the remaining key. Depth counts edges, not
    /// symbols, so the same key reports a smaller depth once compressed.
    ///
    /// # Returns
    ///
    /// * `Some(depth)` - If `key` is a stored key.
    /// * `None` - If the path breaks off or ends on a non-terminal node.
    pub fn depth(&self, key: &str) -> Option<usize> {
        let mut node = &self.root;
        let mut depth = 0;
        let mut rest = key;

        while let Some(symbol) = rest.chars().next() {
            let child = node.children.get(&symbol)?;
            rest = rest.strip_prefix(child.label.as_str())?;
            depth += 1;
            node = child;
        }

        node.is_terminal.then_some(depth)
    }

    /// Searches for a complete key, returning its edge depth or [`NOT_FOUND`].
    pub fn search_and_get_depth(&self, key: &str) -> i64 {
        self.depth(key)
            .and_then(|depth| i64::try_from(depth).ok())
            .unwrap_or(NOT_FOUND)
    }

    /// Checks if a complete key is stored in the tree.
    pub fn contains(&self, key: &str) -> bool {
        self.depth(key).is_some()
    }

    /// Checks if any stored key starts with `prefix`.
    ///
    /// The empty prefix matches as soon as the tree holds a key.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        self.locate_prefix(prefix).is_some()
    }

    /// Checks if `pattern` occurs anywhere in the indexed text.
    ///
    /// Only meaningful for a suffix tree, where every substring of an input
    /// word is a prefix of one of its stored suffixes. On a plain trie this
    /// answers the same question as [`LanaiTree::has_prefix`].
    pub fn contains_substring(&self, pattern: &str) -> bool {
        self.has_prefix(pattern)
    }

    /// Returns every stored key, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
    }

    /// Returns every stored key starting with `prefix`, sorted.
    ///
    /// The prefix may end part-way through a compressed label.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some((node, path)) = self.locate_prefix(prefix) {
            collect_keys(node, path, &mut keys);
        }
        keys.sort_unstable();
        keys
    }

    /// Finds the shallowest node whose path spells `prefix` or extends it
    /// within its last label. Returns the node and the full path to it.
    fn locate_prefix(&self, prefix: &str) -> Option<(&TreeNode, String)> {
        let mut node = &self.root;
        let mut path = String::with_capacity(prefix.len());
        let mut rest = prefix;

        while let Some(symbol) = rest.chars().next() {
            let child = node.children.get(&symbol)?;
            if let Some(tail) = rest.strip_prefix(child.label.as_str()) {
                rest = tail;
            } else if child.label.starts_with(rest) {
                rest = "";
            } else {
                return None;
            }
            path.push_str(&child.label);
            node = child;
        }

        Some((node, path))
    }
}

fn collect_keys(start: &TreeNode, path: String, keys: &mut Vec<String>) {
    let mut stack = vec![(start, path)];

    while let Some((node, path)) = stack.pop() {
        for child in node.children.values() {
            stack.push((child, format!("{path}{}", child.label)));
        }
        if node.is_terminal {
            keys.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::lanai_tree::LanaiTreeConfig;

    fn compressed() -> LanaiTree {
        LanaiTree::with_config(LanaiTreeConfig::new().with_compressed(true))
    }

    #[test]
    fn test_empty_key_is_never_found() {
        let mut tree = LanaiTree::new();
        assert_eq!(tree.search_and_get_depth(""), NOT_FOUND);

        tree.construct_trie_from_text(["a"]).unwrap();
        assert_eq!(tree.depth(""), None);
    }

    #[test]
    fn test_label_must_fully_match() {
        let mut tree = compressed();
        tree.construct_trie_from_text(["romane", "romulus"]).unwrap();

        // 'r' keys the "rom" edge but the label does not match
        assert_eq!(tree.depth("rox"), None);
        assert_eq!(tree.depth("romulus"), Some(2));
        assert!(tree.contains("romane"));
        assert!(!tree.contains("roman"));
    }

    #[test]
    fn test_keys_with_prefix_inside_label() {
        let mut tree = compressed();
        tree.construct_trie_from_text(["apple", "application", "apply", "banana"])
            .unwrap();

        assert_eq!(
            tree.keys_with_prefix("app"),
            vec!["apple", "application", "apply"]
        );
        assert_eq!(tree.keys_with_prefix("applic"), vec!["application"]);
        assert!(tree.keys_with_prefix("orange").is_empty());
        assert!(tree.keys_with_prefix("applex").is_empty());
        assert_eq!(tree.keys().len(), 4);
    }

    #[test]
    fn test_contains_substring() {
        let mut tree = compressed();
        tree.construct_suffix_tree_from_text(["banana", "bandana"]).unwrap();

        for pattern in ["nan", "dan", "band", "a", "anana", "ndana"] {
            assert!(tree.contains_substring(pattern), "missing {pattern}");
        }
        for pattern in ["nab", "bananas", "xyz", "aa"] {
            assert!(!tree.contains_substring(pattern), "unexpected {pattern}");
        }
        assert!(tree.contains_substring(""));
        assert!(!LanaiTree::new().contains_substring(""));
    }
}
