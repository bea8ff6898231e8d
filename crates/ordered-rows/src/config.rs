//! Store configuration.
//!
//! A [`StoreConfig`] names the values a store starts with and the inclusive
//! range random values are drawn from. It can be built in code or read from
//! TOML:
//!
//! ```toml
//! initial_values = [1, 2, 3]
//! random_min = 0
//! random_max = 100
//! ```
//!
//! Every key is optional.

use std::ops::RangeInclusive;
use std::path::Path;

use ordered_rows_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::is_sorted_non_decreasing;

/// Default lower bound for random values.
pub const DEFAULT_RANDOM_MIN: i64 = 0;
/// Default upper bound for random values.
pub const DEFAULT_RANDOM_MAX: i64 = 100;

/// Configuration for a [`SortedListStore`](crate::model::SortedListStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Values the store starts with. Must already be sorted.
    pub initial_values: Vec<i64>,
    /// Smallest value `add_random_value` may produce.
    pub random_min: i64,
    /// Largest value `add_random_value` may produce.
    pub random_max: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_values: Vec::new(),
            random_min: DEFAULT_RANDOM_MIN,
            random_max: DEFAULT_RANDOM_MAX,
        }
    }
}

impl StoreConfig {
    /// Parses and validates a configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading store config");
        Self::from_toml_str(&source)
    }

    /// Sets the initial values.
    pub fn with_initial_values(mut self, values: Vec<i64>) -> Self {
        self.initial_values = values;
        self
    }

    /// Sets the random value range.
    pub fn with_random_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.random_min = *range.start();
        self.random_max = *range.end();
        self
    }

    /// Checks that the random range is non-empty.
    ///
    /// Unsorted initial values are a caller contract violation and are only
    /// logged, not rejected.
    pub fn validate(&self) -> Result<()> {
        if self.random_min > self.random_max {
            return Err(Error::InvalidRange {
                min: self.random_min,
                max: self.random_max,
            });
        }
        if !is_sorted_non_decreasing(&self.initial_values) {
            tracing::warn!(
                target: targets::CONFIG,
                "initial_values are not sorted; inserts will not keep the list ordered"
            );
        }
        Ok(())
    }

    /// The inclusive random value range.
    pub fn random_range(&self) -> RangeInclusive<i64> {
        self.random_min..=self.random_max
    }
}
