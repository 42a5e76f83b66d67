//! Price catalog data contracts.
//!
//! A catalog is the set of purchasable quota tiers for one fixed
//! (administrator, group, term) scope. The host fetches it from the
//! price-data store and passes it in; the engine treats it as
//! read-only and never issues the fetch itself.

use consorte_core::errors::CatalogError;
use consorte_core::types::money::{is_positive, Money};
use serde::{Deserialize, Serialize};

/// One purchasable quota configuration: a contracted credit amount
/// against a fixed monthly installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceTier {
    /// Contracted credit amount.
    pub credit: Money,
    /// Monthly installment for one unit of this tier.
    pub installment: Money,
}

impl PriceTier {
    pub fn new(credit: Money, installment: Money) -> Self {
        Self { credit, installment }
    }

    /// Credit obtained per unit of installment — the ranking key for
    /// the composition optimizer.
    ///
    /// Callers must run [`validate_tiers`] first; a zero installment
    /// makes this division undefined.
    pub fn efficiency(&self) -> Money {
        self.credit / self.installment
    }
}

/// Check the upstream data contract: every tier must carry a positive
/// credit and installment, otherwise unit-count math is undefined.
///
/// An empty slice is valid — it means "no data for this scope", not a
/// contract violation.
pub fn validate_tiers(tiers: &[PriceTier]) -> Result<(), CatalogError> {
    for tier in tiers {
        if !is_positive(tier.installment) {
            return Err(CatalogError::NonPositiveInstallment {
                credit: tier.credit,
                installment: tier.installment,
            });
        }
        if !is_positive(tier.credit) {
            return Err(CatalogError::NonPositiveCredit {
                credit: tier.credit,
                installment: tier.installment,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_efficiency() {
        let tier = PriceTier::new(dec!(300000), dec!(1000));
        assert_eq!(tier.efficiency(), dec!(300));
    }

    #[test]
    fn test_validate_empty_catalog_is_ok() {
        assert!(validate_tiers(&[]).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_installment() {
        let tiers = [PriceTier::new(dec!(100000), dec!(0))];
        assert!(matches!(
            validate_tiers(&tiers),
            Err(CatalogError::NonPositiveInstallment { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_credit() {
        let tiers = [
            PriceTier::new(dec!(100000), dec!(400)),
            PriceTier::new(dec!(-5), dec!(400)),
        ];
        assert!(matches!(
            validate_tiers(&tiers),
            Err(CatalogError::NonPositiveCredit { .. })
        ));
    }
}
