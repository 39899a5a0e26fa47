// Copyright (c) 2025 Kumu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for Lanai Tree construction, compression and search.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::data_structures::lanai_tree::{LanaiTree, LanaiTreeConfig, NOT_FOUND};

// Small alphabet so that words share prefixes and branch often
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{1,8}").unwrap()
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..20)
}

// Probes may be empty and may use a symbol no word contains
fn probe_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcd]{0,9}").unwrap()
}

fn tree(compressed: bool) -> LanaiTree {
    LanaiTree::with_config(LanaiTreeConfig::new().with_compressed(compressed))
}

fn suffixes(words: &[String]) -> BTreeSet<String> {
    words
        .iter()
        .flat_map(|word| (0..word.len()).map(move |i| word[i..].to_string()))
        .collect()
}

proptest! {
    // Property: every inserted word is found, compressed or not
    #[test]
    fn prop_round_trip(words in words_strategy(), compressed in prop::bool::ANY) {
        let mut trie = tree(compressed);
        trie.construct_trie_from_text(&words).unwrap();

        for word in &words {
            prop_assert!(trie.search_and_get_depth(word) >= 1);
        }
    }

    // Property: only inserted words are found
    #[test]
    fn prop_negative_lookup(
        words in words_strategy(),
        probes in prop::collection::vec(probe_strategy(), 1..30),
        compressed in prop::bool::ANY,
    ) {
        let mut trie = tree(compressed);
        trie.construct_trie_from_text(&words).unwrap();

        for probe in &probes {
            let expected = words.contains(probe);
            prop_assert_eq!(trie.search_and_get_depth(probe) != NOT_FOUND, expected);
        }
    }

    // Property: compression changes structure, never the accepted key set
    #[test]
    fn prop_compression_equivalence(
        words in words_strategy(),
        probes in prop::collection::vec(probe_strategy(), 1..30),
    ) {
        let mut plain = tree(false);
        let mut radix = tree(true);
        plain.construct_trie_from_text(&words).unwrap();
        radix.construct_trie_from_text(&words).unwrap();

        for probe in probes.iter().chain(words.iter()) {
            prop_assert_eq!(plain.contains(probe), radix.contains(probe));
        }
        prop_assert_eq!(plain.keys(), radix.keys());

        // Compressed depth never exceeds the symbol count
        for word in &words {
            let depth = radix.depth(word).unwrap();
            prop_assert!(depth <= plain.depth(word).unwrap());
        }
    }

    // Property: no chain nodes survive compression of a trie or a suffix tree
    #[test]
    fn prop_no_chain_nodes_after_compression(words in words_strategy()) {
        let mut trie = tree(true);
        trie.construct_trie_from_text(&words).unwrap();
        prop_assert_eq!(trie.stats().chain_nodes, 0);

        let mut suffix_tree = tree(true);
        suffix_tree.construct_suffix_tree_from_text(&words).unwrap();
        prop_assert_eq!(suffix_tree.stats().chain_nodes, 0);
        prop_assert!(!suffix_tree.root().is_terminal);
    }

    // Property: the suffix tree stores exactly the suffixes of its words
    #[test]
    fn prop_suffix_tree_keys(words in words_strategy(), compressed in prop::bool::ANY) {
        let mut suffix_tree = tree(compressed);
        suffix_tree.construct_suffix_tree_from_text(&words).unwrap();

        let expected: Vec<String> = suffixes(&words).into_iter().collect();
        prop_assert_eq!(suffix_tree.keys(), expected);
    }

    // Property: substring containment agrees with the standard library
    #[test]
    fn prop_contains_substring(words in words_strategy(), pattern in probe_strategy()) {
        let mut suffix_tree = tree(true);
        suffix_tree.construct_suffix_tree_from_text(&words).unwrap();

        let expected = words.iter().any(|word| word.contains(pattern.as_str()));
        prop_assert_eq!(suffix_tree.contains_substring(&pattern), expected);
    }

    // Property: incremental insertion accepts what a bulk build accepts
    #[test]
    fn prop_incremental_matches_bulk(
        base in words_strategy(),
        extra in words_strategy(),
        compressed in prop::bool::ANY,
    ) {
        let mut incremental = tree(compressed);
        incremental.construct_suffix_tree_from_text(&base).unwrap();
        for suffix in suffixes(&extra) {
            incremental.insert_suffix_tree(&suffix).unwrap();
        }

        let mut bulk = tree(compressed);
        let all: Vec<&String> = base.iter().chain(extra.iter()).collect();
        bulk.construct_suffix_tree_from_text(all).unwrap();

        prop_assert_eq!(incremental.keys(), bulk.keys());

        // Re-compressing restores the invariant and the bulk shape
        if compressed {
            incremental.compress();
            prop_assert_eq!(incremental.stats().chain_nodes, 0);
            prop_assert_eq!(incremental.node_count(), bulk.node_count());
        }
    }
}

#[test]
fn test_banana_suffix_completeness() {
    for compressed in [false, true] {
        let mut suffix_tree = tree(compressed);
        suffix_tree.construct_suffix_tree_from_text(["banana"]).unwrap();

        for suffix in ["banana", "anana", "nana", "ana", "na", "a"] {
            assert!(
                suffix_tree.search_and_get_depth(suffix) >= 1,
                "suffix {suffix} missing (compressed: {compressed})"
            );
        }
        assert_eq!(suffix_tree.search_and_get_depth("ban"), NOT_FOUND);
    }
}
