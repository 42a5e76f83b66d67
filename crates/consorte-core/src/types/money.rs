//! Decimal money scalar.
//!
//! Every credit and installment amount is a `rust_decimal::Decimal`:
//! exact base-10 arithmetic, so bundle totals never accumulate float
//! drift.

pub use rust_decimal::Decimal;

/// Money scalar used for credits and installments.
pub type Money = Decimal;

/// True when the value is usable as a money amount in unit-count math.
pub fn is_positive(value: Money) -> bool {
    value > Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_is_positive() {
        assert!(is_positive(dec!(0.01)));
        assert!(!is_positive(Decimal::ZERO));
        assert!(!is_positive(dec!(-500)));
    }
}
