//! Kumu Library
//!
//! Prefix trees and generalized suffix trees over strings, with an optional
//! path-compression pass that turns them into radix trees. The library also
//! carries the configuration, error handling and logging setup shared with
//! the `kumu` binary.
//!
//! # Architecture
//!
//! - `data_structures`: the `LanaiTree` and its builder, compressor and searcher
//! - `config`: layered configuration loaded from files and environment
//! - `error`: the crate error taxonomy and error reporting
//! - `logging`: tracing subscriber setup driven by `LogConfig`

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kumu.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds an empty tree configured from the application config.
pub fn tree_from_config(config: &config::KumuConfig) -> data_structures::LanaiTree {
    data_structures::LanaiTree::with_config((&config.tree).into())
}
