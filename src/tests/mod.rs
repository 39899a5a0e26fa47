//! Test modules for Kumu.
//!
//! Cross-cutting tests for configuration and error handling, plus shared
//! fixtures. Tree-specific tests live next to the tree itself.


pub use test_utils::{word_list_strategy, TestFixture};
