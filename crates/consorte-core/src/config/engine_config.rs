//! Composition engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Tunables for the composition engine. All fields are optional; the
/// `effective_*` accessors fall back to the shared constants.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Ranked tiers the optimizer inspects per call. Default: 10.
    pub max_candidate_tiers: Option<usize>,
    /// Unit cap per composition entry. Default: 10.
    pub max_units_per_entry: Option<u32>,
    /// Composition cache capacity in memoized results. Default: 1024.
    pub cache_capacity: Option<usize>,
}

impl EngineConfig {
    /// Parse a TOML config fragment.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Returns the effective candidate bound, defaulting to 10.
    ///
    /// Clamped to at least 1: a zero bound would route every call
    /// through the optimizer's last-resort fallback.
    pub fn effective_max_candidate_tiers(&self) -> usize {
        self.max_candidate_tiers
            .unwrap_or(constants::MAX_CANDIDATE_TIERS)
            .max(1)
    }

    /// Returns the effective per-entry unit cap, defaulting to 10.
    ///
    /// Clamped to at least 1: a zero cap would add empty entries and
    /// never advance the composition loop.
    pub fn effective_max_units_per_entry(&self) -> u32 {
        self.max_units_per_entry
            .unwrap_or(constants::MAX_UNITS_PER_ENTRY)
            .max(1)
    }

    /// Returns the effective cache capacity, defaulting to 1024.
    pub fn effective_cache_capacity(&self) -> usize {
        self.cache_capacity
            .unwrap_or(constants::DEFAULT_CACHE_CAPACITY)
    }
}
