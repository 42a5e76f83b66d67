//! Single-tier ceiling matcher.
//!
//! Ceiling-first policy: prefer the tightest tier that meets or
//! exceeds the requested installment, and only fall back to the
//! closest tier from below when overshoot is categorically impossible.

use consorte_core::types::money::Money;

use crate::catalog::PriceTier;

/// Find the single tier that best covers `target`.
///
/// Among tiers with `installment >= target`, returns the one with the
/// smallest installment. If no tier reaches the target, returns the
/// tier with the largest installment in the whole catalog. Returns
/// `None` only for an empty catalog — callers surface that as "no data
/// for this scope", never as an internal error.
///
/// Pure read; not cached. The host re-queries this per keystroke.
pub fn find_ceiling_tier(tiers: &[PriceTier], target: Money) -> Option<&PriceTier> {
    let ceiling = tiers
        .iter()
        .filter(|tier| tier.installment >= target)
        .min_by_key(|tier| tier.installment);

    if ceiling.is_some() {
        return ceiling;
    }

    tiers.iter().max_by_key(|tier| tier.installment)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn catalog() -> Vec<PriceTier> {
        vec![
            PriceTier::new(dec!(100000), dec!(400)),
            PriceTier::new(dec!(180000), dec!(700)),
            PriceTier::new(dec!(300000), dec!(1000)),
        ]
    }

    #[test]
    fn test_tightest_cover_wins() {
        let tiers = catalog();
        let tier = find_ceiling_tier(&tiers, dec!(500)).unwrap();
        assert_eq!(tier.installment, dec!(700));
    }

    #[test]
    fn test_exact_cover() {
        let tiers = catalog();
        let tier = find_ceiling_tier(&tiers, dec!(1000)).unwrap();
        assert_eq!(tier.installment, dec!(1000));
    }

    #[test]
    fn test_fallback_from_below() {
        let tiers = catalog();
        // Nothing reaches 5000; the largest installment is the closest.
        let tier = find_ceiling_tier(&tiers, dec!(5000)).unwrap();
        assert_eq!(tier.installment, dec!(1000));
    }

    #[test]
    fn test_empty_catalog_is_none() {
        assert!(find_ceiling_tier(&[], dec!(500)).is_none());
    }

    #[test]
    fn test_zero_target_takes_smallest_installment() {
        let tiers = catalog();
        let tier = find_ceiling_tier(&tiers, dec!(0)).unwrap();
        assert_eq!(tier.installment, dec!(400));
    }
}
