//! Price catalog data-contract errors.

use rust_decimal::Decimal;

use super::error_code::{self, ConsorteErrorCode};

/// Violations of the price-data collaborator's contract.
///
/// "No match" conditions (empty catalog, non-positive target) are not
/// errors — the engine returns empty or fallback values for those.
/// These variants cover tiers that make unit-count math undefined and
/// indicate broken upstream data, not a user-input condition.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("tier has non-positive installment {installment} (credit {credit})")]
    NonPositiveInstallment {
        credit: Decimal,
        installment: Decimal,
    },

    #[error("tier has non-positive credit {credit} (installment {installment})")]
    NonPositiveCredit {
        credit: Decimal,
        installment: Decimal,
    },
}

impl ConsorteErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
