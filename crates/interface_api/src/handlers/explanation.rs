//! Explanations of coverages, pricing factors and discounts

use axum::{
    extract::{Query, State},
    Json,
};

use domain_quote::{
    explain_coverages, explain_discounts, explain_pricing_factors, sample_request,
    CoverageExplanation, DiscountExplanation, PricingFactorGuide, QuoteRequest,
};

use crate::dto::quote::CoverageExplanationQuery;
use crate::{error::ApiError, AppState};

/// Coverage limits across tiers, or for the `coverage_level` given
///
/// An empty `coverage_level` is the same as none.
pub async fn coverage_explanation(
    Query(query): Query<CoverageExplanationQuery>,
) -> Result<Json<CoverageExplanation>, ApiError> {
    Ok(Json(explain_coverages(query.level().as_ref())?))
}

pub async fn pricing_factors() -> Json<PricingFactorGuide> {
    Json(explain_pricing_factors())
}

pub async fn discounts() -> Json<Vec<DiscountExplanation>> {
    Json(explain_discounts())
}

/// A typical request for the current year
pub async fn sample_quote_request(State(state): State<AppState>) -> Json<QuoteRequest> {
    Json(sample_request(state.engine.clock().current_year()))
}
