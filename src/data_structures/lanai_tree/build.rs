// Copyright (c) 2025 Kumu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tree construction: bulk trie and suffix-tree builds plus incremental
//! suffix insertion.

use tracing::{debug, trace};

use super::node::TreeNode;
use super::{LanaiTree, LanaiTreeError, LanaiTreeResult, TreeKind};

impl LanaiTree {
    /// Builds a trie from the given words.
    ///
    /// Every word is validated before the tree is touched, so a rejected
    /// batch leaves the tree unchanged. If compression is enabled the whole
    /// tree is compressed once after all insertions.
    ///
    /// # Arguments
    ///
    /// * `words` - The keys to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If every word was inserted.
    /// * `Err(LanaiTreeError)` - If any word is empty or too long.
    pub fn construct_trie_from_text<I, S>(&mut self, words: I) -> LanaiTreeResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        for word in &words {
            self.validate_key(word.as_ref())?;
        }

        let mut inserted = 0;
        for word in &words {
            if insert_path(&mut self.root, word.as_ref()) {
                inserted += 1;
            }
        }
        self.kind = TreeKind::Trie;

        debug!(
            words = words.len(),
            new_keys = inserted,
            compressed = self.is_compressed(),
            "Constructed trie"
        );

        if self.is_compressed() {
            self.compress();
        }
        Ok(())
    }

    /// Builds a generalized suffix tree over every suffix of every word.
    ///
    /// This is the naive construction: a word of length n costs O(n²).
    ///
    /// # Arguments
    ///
    /// * `words` - The words whose suffixes are inserted.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If every suffix was inserted.
    /// * `Err(LanaiTreeError)` - If any word is empty or too long.
    pub fn construct_suffix_tree_from_text<I, S>(&mut self, words: I) -> LanaiTreeResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        for word in &words {
            self.validate_key(word.as_ref())?;
        }

        let mut suffixes = 0;
        for word in &words {
            let word = word.as_ref();
            for (offset, _) in word.char_indices() {
                insert_path(&mut self.root, &word[offset..]);
                suffixes += 1;
            }
        }
        self.kind = TreeKind::SuffixTree;

        debug!(
            words = words.len(),
            suffixes,
            compressed = self.is_compressed(),
            "Constructed suffix tree"
        );

        if self.is_compressed() {
            self.compress();
        }
        Ok(())
    }

    /// Inserts a single suffix without rebuilding the tree.
    ///
    /// Existing edges are followed as far as they match. The unmatched
    /// remainder is appended as single-symbol nodes even when the tree is
    /// compressed; call [`LanaiTree::compress`] afterwards to collapse them.
    /// A compressed label that the suffix leaves part-way through is split
    /// at the point of divergence.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the suffix was not stored before.
    /// * `Err(LanaiTreeError)` - If the suffix is empty or too long.
    pub fn insert_suffix_tree(&mut self, suffix: &str) -> LanaiTreeResult<bool> {
        self.validate_key(suffix)?;

        let is_new = insert_path(&mut self.root, suffix);
        self.kind = TreeKind::SuffixTree;

        trace!(suffix, is_new, "Inserted suffix");
        Ok(is_new)
    }

    fn validate_key(&self, key: &str) -> LanaiTreeResult<()> {
        if key.is_empty() {
            return Err(LanaiTreeError::EmptyKey);
        }

        let max_len = self.config.max_key_len();
        if key.chars().count() > max_len {
            return Err(LanaiTreeError::KeyTooLong {
                key: key.to_string(),
                max_len,
            });
        }
        Ok(())
    }
}

/// Walks `key` down from `root`, creating what is missing, and marks the
/// final node terminal. Returns `true` if the key was not already stored.
///
/// Edges are matched by whole label. In an uncompressed tree every label is
/// one symbol, so this is the plain per-symbol walk.
fn insert_path(root: &mut TreeNode, key: &str) -> bool {
    let mut node = root;
    let mut rest = key;

    while let Some(symbol) = rest.chars().next() {
        let child = node.child_or_insert(symbol);

        let common = common_prefix_len(&child.label, rest);
        if common < child.label.len() {
            child.split_label(common);
        }

        rest = &rest[common..];
        node = child;
    }

    let is_new = !node.is_terminal;
    node.is_terminal = true;
    is_new
}

/// Length in bytes of the longest common prefix of `a` and `b`, always on a
/// char boundary of both.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((offset, symbol), _)| offset + symbol.len_utf8())
}
