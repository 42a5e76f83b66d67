//! Bundle totals aggregation.

use consorte_core::types::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Bundle;

/// Aggregate credit and installment totals for a bundle, for summary
/// display in the proposal report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleTotals {
    pub total_credit: Money,
    pub total_installment: Money,
}

/// Pure fold over bundle entries. An empty bundle aggregates to zero
/// totals.
pub fn aggregate(bundle: &Bundle) -> BundleTotals {
    let mut totals = BundleTotals::default();
    for entry in &bundle.entries {
        let units = Decimal::from(entry.unit_count);
        totals.total_credit += entry.tier.credit * units;
        totals.total_installment += entry.tier.installment * units;
    }
    totals
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::catalog::PriceTier;
    use crate::composition::types::CompositionEntry;

    use super::*;

    #[test]
    fn test_empty_bundle_aggregates_to_zero() {
        let totals = aggregate(&Bundle::default());
        assert_eq!(totals.total_credit, dec!(0));
        assert_eq!(totals.total_installment, dec!(0));
    }

    #[test]
    fn test_totals_multiply_by_unit_count() {
        let mut bundle = Bundle::default();
        bundle.entries.push(CompositionEntry {
            tier: PriceTier::new(dec!(125000), dec!(500)),
            unit_count: 3,
        });
        let totals = aggregate(&bundle);
        assert_eq!(totals.total_credit, dec!(375000));
        assert_eq!(totals.total_installment, dec!(1500));
    }

    #[test]
    fn test_totals_sum_across_entries() {
        let tier = PriceTier::new(dec!(10000), dec!(100));
        let mut bundle = Bundle::default();
        bundle.entries.push(CompositionEntry {
            tier,
            unit_count: 10,
        });
        bundle.entries.push(CompositionEntry {
            tier,
            unit_count: 5,
        });
        let totals = aggregate(&bundle);
        assert_eq!(totals.total_credit, dec!(150000));
        assert_eq!(totals.total_installment, dec!(1500));
    }
}
