//! Structured span field definitions for Consorte metrics.
//!
//! These constants define the standard field names used in tracing
//! events across the engine. Using consistent field names enables
//! structured log queries from the host.

/// Optimizer: candidate bundles evaluated per compose call.
pub const COMPOSE_CANDIDATES: &str = "compose_candidates";

/// Optimizer: bundle excess over the target installment.
pub const COMPOSE_EXCESS: &str = "compose_excess";

/// Cache: lifetime hit count.
pub const CACHE_HITS: &str = "cache_hits";

/// Cache: lifetime miss count.
pub const CACHE_MISSES: &str = "cache_misses";

/// Cache: hit rate (0.0 - 1.0).
pub const CACHE_HIT_RATE: &str = "cache_hit_rate";
