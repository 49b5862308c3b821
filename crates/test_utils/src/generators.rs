//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating quote requests that pass
//! validation for [`QUOTING_YEAR`](crate::fixtures::QUOTING_YEAR).

use domain_quote::{
    Catalog, CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus,
    QuoteRequest, VehicleCategory, VehicleValue,
};
use proptest::prelude::*;

use crate::fixtures::QUOTING_YEAR;

/// Strategy picking any recognized entry of a catalog
pub fn catalog_strategy<T: Catalog + Clone + std::fmt::Debug>() -> impl Strategy<Value = T> {
    proptest::sample::select(T::all().to_vec())
}

/// Strategy for accepted driver ages
pub fn driver_age_strategy() -> impl Strategy<Value = i64> {
    16i64..=120i64
}

/// Strategy for accepted model years, next year's models included
pub fn vehicle_year_strategy() -> impl Strategy<Value = i64> {
    let year = i64::from(QUOTING_YEAR);
    (year - 20)..=(year + 1)
}

/// Strategy for five-digit ZIP codes
pub fn zip_code_strategy() -> impl Strategy<Value = String> {
    "[0-9]{5}"
}

/// Strategy for requests that pass validation
pub fn valid_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        (
            catalog_strategy::<VehicleCategory>(),
            vehicle_year_strategy(),
            catalog_strategy::<CoverageLevel>(),
            catalog_strategy::<MaritalStatus>(),
            driver_age_strategy(),
        ),
        (
            catalog_strategy::<HomeOwnership>(),
            catalog_strategy::<CarOwnership>(),
            catalog_strategy::<VehicleValue>(),
            catalog_strategy::<DrivingFrequency>(),
            zip_code_strategy(),
        ),
    )
        .prop_map(
            |(
                (vehicle_category, vehicle_year, coverage_level, marital_status, age),
                (home_ownership, car_ownership, vehicle_value, driving_frequency, zip_code),
            )| QuoteRequest {
                vehicle_category,
                vehicle_year,
                coverage_level,
                marital_status,
                age,
                home_ownership,
                car_ownership,
                vehicle_value,
                driving_frequency,
                zip_code,
            },
        )
}
