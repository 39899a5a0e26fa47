// Copyright (c) 2025 Kumu Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai Tree.

/// Errors that can occur in Lanai Tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanaiTreeError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key has more symbols than the tree accepts.
    #[error("Key '{key}' exceeds maximum key length of {max_len}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed number of symbols.
        max_len: usize,
    },
}

/// Result type for Lanai Tree operations
pub type LanaiTreeResult<T> = std::result::Result<T, LanaiTreeError>;
