//! Auto Insurance Rating Domain
//!
//! This crate turns a customer profile into an itemized car insurance quote.
//! It performs no I/O and keeps no state; "now" and the random part of quote
//! references are injected.
//!
//! # Rating Pipeline
//!
//! ```text
//! QuoteRequest -> coverages -> base premium
//!              -> risk factors (age, location, marital, vehicle, driving) -> subtotal
//!              -> discounts -> final premium (floored at $50.00)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quote::{QuoteEngine, QuoteValidator, sample_request};
//!
//! let engine = QuoteEngine::system(timezone);
//! let request = sample_request(engine.clock().current_year());
//!
//! QuoteValidator::check(&request, engine.clock().current_year())?;
//! let quote = engine.assemble_quote(&request);
//! ```

pub mod profile;
pub mod coverage;
pub mod factors;
pub mod discount;
pub mod quote;
pub mod validation;
pub mod explanation;
pub mod error;

pub use profile::{
    sample_request, Catalog, CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership,
    MaritalStatus, QuoteRequest, VehicleCategory, VehicleValue,
};
pub use coverage::{build_coverages, CoverageKind, CoverageLineItem};
pub use factors::{location_bucket, location_factor, RiskFactors};
pub use discount::{compute_discounts, DiscountKind, DiscountLineItem};
pub use quote::{calculate_insurance_quote, QuoteEngine, QuoteResult, MINIMUM_PREMIUM, QUOTE_VALIDITY_DAYS};
pub use validation::{available_vehicle_years, QuoteValidator, ValidationResult};
pub use explanation::{
    explain_coverages, explain_discounts, explain_pricing_factors, CoverageExplanation,
    DiscountExplanation, PricingFactorGuide,
};
pub use error::QuoteError;
