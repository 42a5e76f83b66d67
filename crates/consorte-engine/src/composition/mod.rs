//! Quota composition — optimizer, cache, and totals.
//!
//! Control flow: the caller asks the cache for (catalog, target,
//! preference); on miss the optimizer ranks tiers by efficiency, grows
//! one candidate bundle per top-ranked tier, and keeps the
//! minimal-overshoot candidate; totals reduce the winning bundle for
//! summary display.

pub mod cache;
pub mod optimizer;
pub mod totals;
pub mod types;
