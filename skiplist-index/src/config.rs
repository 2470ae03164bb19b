//! Configuration for the skip-list index

use skiplist_core::{Error, Result};

/// Keys per node slot array
///
/// The node layout leaves room to grow this without changing call sites, but
/// the structural core only ever populates slot 0 (no fat nodes yet).
pub const ARR_SIZE: usize = 1;

/// Padding hint for node layout, so towers don't false-share cache lines
pub const ASSUMED_CACHE_LINE_SIZE: usize = 64;

/// Tunable structural parameters for a [`SkipList`](crate::skiplist::SkipList)
///
/// # Example
///
/// ```
/// use skiplist_index::SkipListConfig;
///
/// let config = SkipListConfig {
///     unique_keys: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SkipListConfig {
    /// Initial published level count
    pub initial_height: u32,

    /// Hard cap on level height
    pub max_level: u32,

    /// Per-level CAS retry budget for insert
    pub max_insert_reattempts: u32,

    /// Whether duplicate keys are rejected
    pub unique_keys: bool,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            initial_height: 10,
            max_level: 2000,
            max_insert_reattempts: 100,
            unique_keys: false,
        }
    }
}

impl SkipListConfig {
    /// Validates that the configuration is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.initial_height == 0 {
            return Err(Error::InvalidConfig(
                "initial_height must be at least 1".to_string(),
            ));
        }
        if self.initial_height > self.max_level {
            return Err(Error::InvalidConfig(format!(
                "initial_height ({}) exceeds max_level ({})",
                self.initial_height, self.max_level
            )));
        }
        if self.max_insert_reattempts == 0 {
            return Err(Error::InvalidConfig(
                "max_insert_reattempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SkipListConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_height() {
        let config = SkipListConfig {
            initial_height: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_height_above_max_level() {
        let config = SkipListConfig {
            initial_height: 20,
            max_level: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
