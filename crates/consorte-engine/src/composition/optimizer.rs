//! Composition optimizer.
//!
//! A bounded greedy heuristic, not an exact bin-packing solver: rank
//! tiers by efficiency under the active preference, grow one candidate
//! bundle per top-ranked tier, and keep the candidate with the
//! smallest overshoot of the target.

use consorte_core::config::EngineConfig;
use consorte_core::errors::CatalogError;
use consorte_core::types::money::Money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::{validate_tiers, PriceTier};

use super::types::{Bundle, CompositionEntry, CompositionPreference};

/// Compose a bundle covering `target` with the default limits.
pub fn compose(
    tiers: &[PriceTier],
    target: Money,
    preference: CompositionPreference,
) -> Result<Bundle, CatalogError> {
    compose_with(tiers, target, preference, &EngineConfig::default())
}

/// Compose a bundle covering `target` with explicit limits.
///
/// Returns an empty bundle when the catalog is empty or the target is
/// non-positive — "nothing to compose", not an error. Fails only on a
/// data-contract violation inside the catalog itself.
///
/// Postcondition: for a non-empty catalog and positive target, the
/// returned bundle's total installment is `>= target`. It is never
/// guaranteed to equal the target exactly, since tiers are discrete.
pub fn compose_with(
    tiers: &[PriceTier],
    target: Money,
    preference: CompositionPreference,
    config: &EngineConfig,
) -> Result<Bundle, CatalogError> {
    validate_tiers(tiers)?;

    if tiers.is_empty() || target <= Decimal::ZERO {
        return Ok(Bundle::default());
    }

    let ranked = rank_tiers(tiers, preference);
    let bound = ranked.len().min(config.effective_max_candidate_tiers());
    let unit_cap = config.effective_max_units_per_entry();

    let mut best: Option<(Bundle, Money)> = None;
    for tier in &ranked[..bound] {
        let (bundle, excess) = grow_candidate(*tier, target, unit_cap);
        // Field names follow consorte_core::tracing::metrics.
        debug!(
            installment = %tier.installment,
            entries = bundle.entries.len(),
            compose_excess = %excess,
            "composition candidate"
        );

        // Strict comparison keeps ties first-seen: candidates are
        // visited in ranked order, so an equal-excess bundle from a
        // worse-ranked tier never displaces the incumbent.
        let improves = match &best {
            Some((_, incumbent)) => excess < *incumbent,
            None => true,
        };
        if improves {
            best = Some((bundle, excess));
        }
    }

    match best {
        Some((bundle, excess)) => {
            debug!(
                compose_candidates = bound,
                entries = bundle.entries.len(),
                compose_excess = %excess,
                "composition selected"
            );
            Ok(bundle)
        }
        // Unreachable once the catalog is non-empty, since the loop
        // above always produces at least one candidate. Kept as a
        // last-resort ladder: one oversized entry of the best-ranked
        // tier, with no excess minimization.
        None => Ok(ranked
            .first()
            .map(|tier| fallback_bundle(*tier, target))
            .unwrap_or_default()),
    }
}

/// Rank tiers by efficiency (credit per unit of installment).
///
/// `FewerQuotas` ranks descending, `MoreQuotas` ascending. The sort is
/// stable, so catalog order breaks efficiency ties.
fn rank_tiers(tiers: &[PriceTier], preference: CompositionPreference) -> Vec<PriceTier> {
    let mut ranked = tiers.to_vec();
    match preference {
        CompositionPreference::FewerQuotas => {
            ranked.sort_by(|a, b| b.efficiency().cmp(&a.efficiency()));
        }
        CompositionPreference::MoreQuotas => {
            ranked.sort_by(|a, b| a.efficiency().cmp(&b.efficiency()));
        }
    }
    ranked
}

/// Grow a candidate bundle using only the given tier until its running
/// installment total covers the target. Returns the bundle and its
/// excess over the target.
///
/// Each entry carries at most `unit_cap` units; when the true need
/// exceeds the cap, further iterations append additional entries of
/// the same tier.
fn grow_candidate(tier: PriceTier, target: Money, unit_cap: u32) -> (Bundle, Money) {
    let mut bundle = Bundle::default();
    let mut running_total = Decimal::ZERO;

    while running_total < target {
        let remaining = target - running_total;
        let needed = (remaining / tier.installment).ceil();
        let units = if needed >= Decimal::from(unit_cap) {
            unit_cap
        } else {
            // `needed` is a small positive integer here.
            needed.to_u32().unwrap_or(1).max(1)
        };

        bundle.entries.push(CompositionEntry {
            tier,
            unit_count: units,
        });
        running_total += tier.installment * Decimal::from(units);
    }

    (bundle, running_total - target)
}

/// Last-resort single-entry bundle: `ceil(target / installment)` units
/// of the given tier in one uncapped entry.
///
/// This path is exempt from the per-entry unit cap: it only runs when
/// the candidate loop produced nothing, and then a single entry must
/// carry the whole need regardless of size. The `unit_count >= 1`
/// invariant still holds.
fn fallback_bundle(tier: PriceTier, target: Money) -> Bundle {
    let units = (target / tier.installment)
        .ceil()
        .to_u32()
        .unwrap_or(u32::MAX)
        .max(1);

    let mut bundle = Bundle::default();
    bundle.entries.push(CompositionEntry {
        tier,
        unit_count: units,
    });
    bundle
}
