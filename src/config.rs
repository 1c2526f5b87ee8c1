use std::{fmt::Debug, hash::Hash};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capped_set::{CappedSet, CappedSetError};

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 100;

/// Log level used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(#[from] CappedSetError),
}

/// Settings for building a capped set
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CappedSetConfig {
    pub capacity: usize,
    pub log_level: String,
}

impl Default for CappedSetConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CappedSetConfig {
    /// Parse and validate a config from JSON. Missing fields take their defaults
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: CappedSetConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            warn!("Rejected config with capacity 0");
            return Err(ConfigError::InvalidCapacity(CappedSetError::InvalidCapacity));
        }
        Ok(())
    }

    /// Build an empty set with the configured capacity
    pub fn build<K, S>(&self) -> Result<CappedSet<K, S>, ConfigError>
    where
        K: Hash + Eq + Clone + Debug,
        S: Ord + Copy + Debug,
    {
        Ok(CappedSet::new(self.capacity)?)
    }
}
