//! Composition result cache.
//!
//! Session-scoped memoization for the repeated compose calls issued
//! while a user types a target installment. The cache is caller-owned
//! rather than process-global, so identically-sized catalogs from
//! different scopes never collide across sessions, and tests construct
//! a fresh cache each time.

use consorte_core::config::EngineConfig;
use consorte_core::errors::CatalogError;
use consorte_core::types::collections::FxHashMap;
use consorte_core::types::money::Money;
use tracing::trace;

use crate::catalog::PriceTier;

use super::optimizer::compose_with;
use super::types::{Bundle, CompositionPreference};

/// Memoization key. Catalog identity is approximated by its size: a
/// catalog whose contents change while its size stays constant can
/// serve a stale bundle. Call [`CompositionCache::clear`] on catalog
/// mutation to avoid that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    target: Money,
    preference: CompositionPreference,
    catalog_len: usize,
}

/// Caller-owned composition cache. Purely a performance layer: it
/// returns exactly what the optimizer returned the first time a key
/// was computed.
#[derive(Debug, Default)]
pub struct CompositionCache {
    config: EngineConfig,
    entries: FxHashMap<CacheKey, Bundle>,
    hits: u64,
    misses: u64,
}

impl CompositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cache with explicit engine limits and capacity.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Return the memoized bundle for `(target, preference, len)`, or
    /// compute it, store it, and return it.
    pub fn get_or_compute(
        &mut self,
        tiers: &[PriceTier],
        target: Money,
        preference: CompositionPreference,
    ) -> Result<Bundle, CatalogError> {
        let key = CacheKey {
            target,
            preference,
            catalog_len: tiers.len(),
        };

        if let Some(bundle) = self.entries.get(&key) {
            self.hits += 1;
            // Field names follow consorte_core::tracing::metrics.
            trace!(
                cache_hits = self.hits,
                cache_misses = self.misses,
                cache_hit_rate = self.hit_rate(),
                "composition cache hit"
            );
            return Ok(bundle.clone());
        }

        let bundle = compose_with(tiers, target, preference, &self.config)?;
        self.misses += 1;

        // No per-entry eviction policy: at capacity the map is reset
        // wholesale. Keys are keystroke-grained targets, so a reset
        // costs one recompute per key afterwards.
        if self.entries.len() >= self.config.effective_cache_capacity() {
            self.entries.clear();
        }
        self.entries.insert(key, bundle.clone());
        Ok(bundle)
    }

    /// Number of memoized results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all memoized results. Call when the underlying catalog
    /// changes in place (prices updated without changing the tier
    /// count), since the key cannot see content changes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Hit rate over this cache's lifetime (0.0 - 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
