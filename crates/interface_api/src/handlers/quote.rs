//! Quote handlers

use axum::{extract::{rejection::JsonRejection, State}, Json};
use tracing::{info, warn};

use domain_quote::{QuoteRequest, QuoteValidator};

use crate::dto::quote::QuoteResponse;
use crate::{error::ApiError, AppState};

/// Validates a quote request and prices it
pub async fn calculate_quote(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(request) = payload?;
    let current_year = state.engine.clock().current_year();

    if let Err(err) = QuoteValidator::check(&request, current_year) {
        warn!(errors = err.details().len(), "Rejected quote request");
        return Err(err.into());
    }

    let quote = state.engine.assemble_quote(&request);
    info!(
        quote_id = %quote.quote_id,
        coverage_level = %request.coverage_level,
        final_premium = %quote.final_premium,
        "Quote issued"
    );

    Ok(Json(quote.into()))
}
