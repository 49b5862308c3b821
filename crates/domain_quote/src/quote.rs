//! Quote assembly
//!
//! Orchestrates the coverage catalog, risk factors and discount rules into a
//! priced, itemized quote. Assembly is total: any request, recognized labels
//! or not, produces a quote.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use core_kernel::{round_half_up, Money, QuoteId, RandomSource, ReferenceClock, SystemClock, ThreadRandom, Timezone};

use crate::coverage::{base_premium, build_coverages, CoverageLineItem};
use crate::discount::{compute_discounts, total_discounts, DiscountLineItem};
use crate::factors::RiskFactors;
use crate::profile::QuoteRequest;

/// Floor on the final premium after discounts
pub const MINIMUM_PREMIUM: Decimal = dec!(50.00);

/// Days a quote stays valid, counted from the quoting date
pub const QUOTE_VALIDITY_DAYS: i64 = 30;

/// A priced quote
///
/// Every money figure and factor is rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub quote_id: QuoteId,
    /// The profile the quote was priced for
    pub request: QuoteRequest,
    pub coverages: Vec<CoverageLineItem>,
    pub base_premium: Money,
    pub factors: RiskFactors,
    /// Base premium after all risk factors
    pub subtotal: Money,
    pub discounts: Vec<DiscountLineItem>,
    pub total_discounts: Money,
    pub final_premium: Money,
    pub expiration_date: NaiveDate,
    /// Last instant of the expiration date in the quoting timezone
    pub expires_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
}

/// Prices a quote against an explicit clock and random source
///
/// Performs no validation; see [`QuoteValidator`](crate::validation::QuoteValidator).
pub fn calculate_insurance_quote(
    request: &QuoteRequest,
    clock: &dyn ReferenceClock,
    random: &dyn RandomSource,
) -> QuoteResult {
    let now = clock.now();
    let timezone = clock.timezone();
    let today = timezone.local_date(now);
    let current_year = clock.current_year();

    let coverages = build_coverages(&request.coverage_level, &request.vehicle_value);
    let base = base_premium(&coverages);

    let factors = RiskFactors::assess(request, current_year);
    let subtotal = base.amount() * factors.combined();

    let discounts = compute_discounts(request, current_year);
    let discount_total = total_discounts(&discounts);

    let final_premium = Money::usd(round_half_up(subtotal - discount_total.amount(), 2))
        .at_least(Money::usd(MINIMUM_PREMIUM));

    let quote_id = QuoteId::generate(today, random);
    let expiration_date = today + Duration::days(QUOTE_VALIDITY_DAYS);

    let quote = QuoteResult {
        quote_id,
        request: request.clone(),
        coverages,
        base_premium: base.round_to_currency(),
        factors: factors.rounded(),
        subtotal: Money::usd(round_half_up(subtotal, 2)),
        discounts,
        total_discounts: discount_total.round_to_currency(),
        final_premium,
        expiration_date,
        expires_at: timezone.end_of_day(expiration_date),
        generated_at: now,
    };

    debug!(
        quote_id = %quote.quote_id,
        base_premium = %quote.base_premium,
        subtotal = %quote.subtotal,
        total_discounts = %quote.total_discounts,
        final_premium = %quote.final_premium,
        "Quote assembled"
    );

    quote
}

/// Prices quotes with a shared clock and random source
#[derive(Clone)]
pub struct QuoteEngine {
    clock: Arc<dyn ReferenceClock>,
    random: Arc<dyn RandomSource>,
}

impl QuoteEngine {
    pub fn new(clock: Arc<dyn ReferenceClock>, random: Arc<dyn RandomSource>) -> Self {
        Self { clock, random }
    }

    /// Wall clock in `timezone` and thread-local randomness
    pub fn system(timezone: Timezone) -> Self {
        Self::new(Arc::new(SystemClock::new(timezone)), Arc::new(ThreadRandom))
    }

    /// The clock quotes are dated against
    pub fn clock(&self) -> &dyn ReferenceClock {
        self.clock.as_ref()
    }

    /// Prices `request`
    pub fn assemble_quote(&self, request: &QuoteRequest) -> QuoteResult {
        calculate_insurance_quote(request, self.clock.as_ref(), self.random.as_ref())
    }
}

impl std::fmt::Debug for QuoteEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteEngine")
            .field("timezone", &self.clock.timezone())
            .finish_non_exhaustive()
    }
}
