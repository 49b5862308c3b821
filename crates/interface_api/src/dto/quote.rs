//! Quote DTOs
//!
//! The quote response is flat: input fields, line items and totals sit side
//! by side, with money and factors as JSON numbers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_quote::{CoverageLevel, CoverageLineItem, DiscountLineItem, QuoteResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct CoverageResponse {
    pub name: String,
    /// Limit or deductible wording
    pub amount: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub premium: Decimal,
    pub description: String,
}

impl From<CoverageLineItem> for CoverageResponse {
    fn from(item: CoverageLineItem) -> Self {
        Self {
            name: item.name,
            amount: item.limit,
            premium: item.premium.amount(),
            description: item.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiscountResponse {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
}

impl From<DiscountLineItem> for DiscountResponse {
    fn from(item: DiscountLineItem) -> Self {
        Self {
            name: item.name,
            amount: item.amount.amount(),
            description: item.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub vehicle_category: String,
    pub vehicle_year: i64,
    pub coverage_level: String,
    pub marital_status: String,
    pub age: i64,
    pub home_ownership: String,
    pub car_ownership: String,
    pub vehicle_value: String,
    pub driving_frequency: String,
    pub zip_code: String,

    pub coverages: Vec<CoverageResponse>,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_premium: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub age_factor: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub location_factor: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub marital_factor: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub vehicle_factor: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub driving_factor: Decimal,

    pub discounts: Vec<DiscountResponse>,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_discounts: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_premium: Decimal,

    pub quote_id: String,
    pub expiration_date: NaiveDate,
    pub expires_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
}

impl From<QuoteResult> for QuoteResponse {
    fn from(quote: QuoteResult) -> Self {
        let request = quote.request;

        Self {
            vehicle_category: request.vehicle_category.into(),
            vehicle_year: request.vehicle_year,
            coverage_level: request.coverage_level.into(),
            marital_status: request.marital_status.into(),
            age: request.age,
            home_ownership: request.home_ownership.into(),
            car_ownership: request.car_ownership.into(),
            vehicle_value: request.vehicle_value.into(),
            driving_frequency: request.driving_frequency.into(),
            zip_code: request.zip_code,
            coverages: quote.coverages.into_iter().map(Into::into).collect(),
            base_premium: quote.base_premium.amount(),
            age_factor: quote.factors.age,
            location_factor: quote.factors.location,
            marital_factor: quote.factors.marital,
            vehicle_factor: quote.factors.vehicle,
            driving_factor: quote.factors.driving,
            discounts: quote.discounts.into_iter().map(Into::into).collect(),
            subtotal: quote.subtotal.amount(),
            total_discounts: quote.total_discounts.amount(),
            final_premium: quote.final_premium.amount(),
            quote_id: quote.quote_id.to_string(),
            expiration_date: quote.expiration_date,
            expires_at: quote.expires_at,
            generated_at: quote.generated_at,
        }
    }
}

/// Query string of the coverage explanation endpoint
#[derive(Debug, Deserialize)]
pub struct CoverageExplanationQuery {
    pub coverage_level: Option<String>,
}

impl CoverageExplanationQuery {
    /// Requested tier, if a non-empty one was given
    pub fn level(&self) -> Option<CoverageLevel> {
        self.coverage_level
            .as_deref()
            .filter(|level| !level.is_empty())
            .map(CoverageLevel::from)
    }
}
