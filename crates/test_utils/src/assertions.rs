//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for quotes and money that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_quote::{QuoteResult, MINIMUM_PREMIUM};
use rust_decimal::Decimal;

/// Asserts a Money value carries at most two decimal places
pub fn assert_whole_cents(money: &Money) {
    assert_eq!(
        money.amount(),
        money.round_to_currency().amount(),
        "Expected a whole number of cents, got {}",
        money.amount()
    );
}

/// Asserts the headline figures of a quote
pub fn assert_quote_totals(
    quote: &QuoteResult,
    base: Decimal,
    subtotal: Decimal,
    discounts: Decimal,
    final_premium: Decimal,
) {
    assert_eq!(quote.base_premium.amount(), base, "base premium of {}", quote.quote_id);
    assert_eq!(quote.subtotal.amount(), subtotal, "subtotal of {}", quote.quote_id);
    assert_eq!(
        quote.total_discounts.amount(),
        discounts,
        "total discounts of {}",
        quote.quote_id
    );
    assert_eq!(
        quote.final_premium.amount(),
        final_premium,
        "final premium of {}",
        quote.quote_id
    );
}

/// Asserts the arithmetic that ties a quote's figures together
///
/// Line items sum to the base premium and to the total discounts, and the
/// final premium is the floored difference of subtotal and discounts.
pub fn assert_quote_consistent(quote: &QuoteResult) {
    let base: Money = quote.coverages.iter().map(|c| &c.premium).sum();
    assert_eq!(base.amount(), quote.base_premium.amount(), "coverage premiums must sum to base");

    let discounts: Money = quote.discounts.iter().map(|d| &d.amount).sum();
    assert_eq!(
        discounts.amount(),
        quote.total_discounts.amount(),
        "discount amounts must sum to total"
    );

    let expected_final =
        (quote.subtotal.amount() - quote.total_discounts.amount()).max(MINIMUM_PREMIUM);
    assert_eq!(quote.final_premium.amount(), expected_final, "final premium of {}", quote.quote_id);

    for money in [&quote.base_premium, &quote.subtotal, &quote.total_discounts, &quote.final_premium] {
        assert_whole_cents(money);
    }
}
