//! Tree configuration module.
//!
//! Settings applied to every `LanaiTree` built from application config.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_tree::{LanaiTreeConfig, DEFAULT_MAX_KEY_LEN};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_key_len`.
const MAX_KEY_LEN_LIMIT: usize = 1 << 20;

/// Tree construction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Whether bulk construction compresses chains into multi-symbol edges
    pub compressed: bool,

    /// Maximum number of symbols in a single key
    pub max_key_len: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            compressed: false,
            max_key_len: DEFAULT_MAX_KEY_LEN,
        }
    }
}

impl Validate for TreeConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_len == 0 || self.max_key_len > MAX_KEY_LEN_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "tree.max_key_len".to_string(),
                message: format!("must be between 1 and {MAX_KEY_LEN_LIMIT}"),
            });
        }
        Ok(())
    }
}

impl From<&TreeConfig> for LanaiTreeConfig {
    fn from(config: &TreeConfig) -> Self {
        LanaiTreeConfig::new()
            .with_compressed(config.compressed)
            .with_max_key_len(config.max_key_len.max(1))
    }
}
