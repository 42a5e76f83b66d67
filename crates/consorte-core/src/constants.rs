//! Shared constants for the Consorte quota engine.

/// Consorte version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of ranked tiers the composition optimizer inspects
/// per call. The search is deliberately bounded; it never walks the
/// full catalog.
pub const MAX_CANDIDATE_TIERS: usize = 10;

/// Maximum units a single composition entry may carry. A tier that
/// must supply more units than this keeps appending further entries of
/// the same tier until the target is covered.
pub const MAX_UNITS_PER_ENTRY: u32 = 10;

/// Default composition cache capacity in memoized results.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
