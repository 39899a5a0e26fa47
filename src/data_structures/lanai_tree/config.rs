// Copyright (c) 2025 Kumu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lanai Tree.

/// Default upper bound on the number of symbols in a single key.
pub const DEFAULT_MAX_KEY_LEN: usize = 4096;

/// Configuration options for the Lanai Tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanaiTreeConfig {
    /// Whether bulk construction compresses chains into multi-symbol edges
    compressed: bool,

    /// Maximum number of symbols accepted in one key
    max_key_len: usize,
}

impl LanaiTreeConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - compressed: false
    /// - max_key_len: 4096
    pub fn new() -> Self {
        Self {
            compressed: false,
            max_key_len: DEFAULT_MAX_KEY_LEN,
        }
    }

    /// Enable or disable chain compression after bulk construction.
    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    /// Set the maximum number of symbols accepted in one key.
    ///
    /// Suffix construction inserts every suffix of a word, so this also caps
    /// the per-word cost of building a suffix tree.
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        if max_key_len == 0 {
            panic!("Maximum key length must be greater than 0");
        }
        self.max_key_len = max_key_len;
        self
    }

    /// Get whether compression is enabled
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Get the maximum key length
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }
}

impl Default for LanaiTreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
