//! Unit tests for the Money module
//!
//! Tests cover money creation, cent rounding, flooring, summation and
//! serialization.

use core_kernel::{round_half_up, Money};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::usd(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        assert!(Money::zero().is_zero());
        assert!(!Money::usd(dec!(0.01)).is_zero());
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_two_places() {
        assert_eq!(Money::usd(dec!(4753.7742)).round_to_currency().amount(), dec!(4753.77));
        assert_eq!(Money::usd(dec!(1479.3192)).round_to_currency().amount(), dec!(1479.32));
    }

    /// Midpoints round away from zero, not to even
    #[test]
    fn test_round_to_currency_midpoint() {
        assert_eq!(Money::usd(dec!(10.125)).round_to_currency().amount(), dec!(10.13));
        assert_eq!(Money::usd(dec!(10.135)).round_to_currency().amount(), dec!(10.14));
        assert_eq!(Money::usd(dec!(-10.125)).round_to_currency().amount(), dec!(-10.13));
    }

    #[test]
    fn test_round_half_up_on_factors() {
        assert_eq!(round_half_up(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_half_up(dec!(1.878435), 2), dec!(1.88));
        assert_eq!(round_half_up(dec!(0.6048), 2), dec!(0.60));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_subtraction_can_go_below_floor() {
        let subtotal = Money::usd(dec!(243.09));
        let discounts = Money::usd(dec!(195));
        let floor = Money::usd(dec!(50));

        let net = subtotal - discounts;
        assert_eq!(net.amount(), dec!(48.09));
        assert_eq!(net.at_least(floor), floor);
    }

    #[test]
    fn test_amounts_order_by_value() {
        assert!(Money::usd(dec!(49.99)) < Money::usd(dec!(50)));
        assert_eq!(Money::usd(dec!(50.00)), Money::usd(dec!(50)));
    }

    #[test]
    fn test_sum_of_empty_run_is_zero() {
        let empty: Vec<Money> = vec![];
        let total: Money = empty.iter().sum();
        assert!(total.is_zero());
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_symbol_and_two_places() {
        assert_eq!(Money::usd(dec!(50)).to_string(), "$50.00");
        assert_eq!(Money::usd(dec!(12.5)).to_string(), "$12.50");
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::usd(dec!(516.36))).unwrap();
        assert_eq!(json, "516.36");
    }
}
