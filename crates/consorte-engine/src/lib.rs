//! Quota matching and composition engine.
//!
//! Given a price catalog of (credit, installment) tiers for one fixed
//! administrator/group/term scope and a client's target monthly
//! installment, this crate finds the tightest single covering tier and
//! assembles a multi-tier bundle whose summed installments minimally
//! overshoot the target.
//!
//! The catalog is fetched by the host and passed in by value; the
//! engine is synchronous, does no I/O, and signals "no match" with
//! empty values rather than errors.
//!
//! ```
//! use consorte_engine::{aggregate, compose, CompositionPreference, PriceTier};
//! use rust_decimal::Decimal;
//!
//! let catalog = vec![PriceTier::new(Decimal::from(125_000), Decimal::from(500))];
//! let bundle = compose(&catalog, Decimal::from(1_200), CompositionPreference::FewerQuotas)?;
//! let totals = aggregate(&bundle);
//! assert_eq!(totals.total_installment, Decimal::from(1_500));
//! # Ok::<(), consorte_core::errors::CatalogError>(())
//! ```

pub mod catalog;
pub mod composition;
pub mod matcher;

pub use catalog::{validate_tiers, PriceTier};
pub use composition::cache::CompositionCache;
pub use composition::optimizer::{compose, compose_with};
pub use composition::totals::{aggregate, BundleTotals};
pub use composition::types::{Bundle, CompositionEntry, CompositionPreference};
pub use matcher::find_ceiling_tier;
