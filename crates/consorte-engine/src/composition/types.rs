//! Composition types — preference, entries, bundles.

use consorte_core::types::collections::SmallVec4;
use consorte_core::types::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::PriceTier;

/// Ranking direction for the composition optimizer. Set once per
/// query; the engine holds no preference state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositionPreference {
    /// Favor fewer, richer quotas: rank by descending efficiency.
    FewerQuotas,
    /// Favor many smaller quotas: rank by ascending efficiency.
    MoreQuotas,
}

/// `unit_count` quotas of a single tier within a bundle.
///
/// Invariant: `unit_count >= 1`. One entry never carries more than the
/// per-entry unit cap, so a finished bundle may legitimately contain
/// several entries referencing the identical tier when that tier alone
/// must supply more units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionEntry {
    pub tier: PriceTier,
    pub unit_count: u32,
}

/// An ordered multi-tier bundle assembled for one optimization call.
/// Derived, never persisted; immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub entries: SmallVec4<CompositionEntry>,
}

impl Bundle {
    /// True when no composition was available (empty catalog or
    /// non-positive target).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summed installment across all entries.
    pub fn total_installment(&self) -> Money {
        self.entries
            .iter()
            .map(|entry| entry.tier.installment * Decimal::from(entry.unit_count))
            .sum()
    }

    /// Total quota units across all entries.
    pub fn total_units(&self) -> u32 {
        self.entries.iter().map(|entry| entry.unit_count).sum()
    }
}
