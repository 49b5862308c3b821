//! Money types with precise decimal arithmetic
//!
//! Quote amounts are carried as `rust_decimal::Decimal` so that line items,
//! subtotals and discounts add up exactly. Every quote is priced in US
//! dollars, and rounding to cents always rounds half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// Decimal places of a presented dollar amount
const CENT_PLACES: u32 = 2;

/// Rounds a decimal to `dp` places, midpoints away from zero
///
/// Used for both money and rating factors so that every figure on a quote
/// is rounded the same way.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// A US dollar amount
///
/// Amounts are kept with 4 decimal places internally; call
/// [`Money::round_to_currency`] before presenting a figure. Serializes as a
/// plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl Money {
    /// Creates a dollar amount
    pub fn usd(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(4),
        }
    }

    /// Zero dollars
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Rounds to whole cents
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: round_half_up(self.amount, CENT_PLACES),
        }
    }

    /// Returns the larger of this amount and `floor`
    pub fn at_least(self, floor: Money) -> Money {
        self.max(floor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.dp$}", self.amount, dp = CENT_PLACES as usize)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::usd(self.amount + other.amount)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::usd(self.amount - other.amount)
    }
}

impl<'a> Sum<&'a Money> for Money {
    /// Sums a run of amounts; an empty run is zero
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::usd(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::usd(dec!(100.00));
        let b = Money::usd(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    fn test_round_half_up_midpoint() {
        assert_eq!(round_half_up(dec!(0.905), 2), dec!(0.91));
        assert_eq!(round_half_up(dec!(0.915), 2), dec!(0.92));
        assert_eq!(round_half_up(dec!(666.364), 2), dec!(666.36));
    }

    #[test]
    fn test_at_least_floors_amount() {
        let floor = Money::usd(dec!(50));
        assert_eq!(Money::usd(dec!(48.09)).at_least(floor), floor);
        assert_eq!(Money::usd(dec!(-12.5)).at_least(floor), floor);
        assert_eq!(Money::usd(dec!(516.36)).at_least(floor).amount(), dec!(516.36));
    }

    #[test]
    fn test_sum_of_amounts() {
        let items = [Money::usd(dec!(250)), Money::usd(dec!(150)), Money::usd(dec!(100))];
        let total: Money = items.iter().sum();
        assert_eq!(total.amount(), dec!(500));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::usd(dec!(516.36)).to_string(), "$516.36");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_moves_less_than_half_a_cent(cents in 0i64..100_000_000i64, extra in 0i64..100i64) {
            let raw = Decimal::new(cents * 100 + extra, 4);
            let rounded = Money::usd(raw).round_to_currency().amount();
            prop_assert!((rounded - raw).abs() <= dec!(0.005));
        }

        #[test]
        fn money_arithmetic_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::usd(Decimal::new(a, 2));
            let mb = Money::usd(Decimal::new(b, 2));
            let mc = Money::usd(Decimal::new(c, 2));

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }
    }
}
