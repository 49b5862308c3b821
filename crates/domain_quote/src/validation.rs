//! Quote request validation
//!
//! The rating core prices whatever it is given. Requests from outside the
//! process are checked here first, and every violation is reported at once.
//!
//! # Validation Rules
//!
//! - Driver age between 16 and 120 inclusive
//! - Vehicle year within the last 20 years, or next year's model
//! - ZIP code of exactly five ASCII digits
//! - Every categorical field is one of its catalog labels

use std::ops::RangeInclusive;

use crate::error::QuoteError;
use crate::profile::{Catalog, QuoteRequest};

/// Accepted driver ages
pub const DRIVER_AGE_RANGE: RangeInclusive<i64> = 16..=120;

/// Oldest model year accepted, as years before the current one
pub const MAX_VEHICLE_AGE: i32 = 20;

/// Model years accepted in `current_year`
pub fn vehicle_year_window(current_year: i32) -> RangeInclusive<i64> {
    let current_year = i64::from(current_year);
    (current_year - i64::from(MAX_VEHICLE_AGE))..=(current_year + 1)
}

/// Model years offered for selection, newest first
///
/// Next year's models are accepted by validation but not offered.
pub fn available_vehicle_years(current_year: i32) -> Vec<i32> {
    ((current_year - MAX_VEHICLE_AGE)..=current_year).rev().collect()
}

/// Result of request validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Converts to a `Result`, carrying every collected error
    pub fn into_result(self) -> Result<(), QuoteError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(QuoteError::Validation(self.errors))
        }
    }
}

/// Checks quote requests before they reach the rating core
pub struct QuoteValidator;

impl QuoteValidator {
    /// Validates every field of `request` against the rules for `current_year`
    pub fn validate(request: &QuoteRequest, current_year: i32) -> ValidationResult {
        let mut result = ValidationResult::ok();

        result.merge(Self::validate_catalog(&request.vehicle_category));
        result.merge(Self::validate_vehicle_year(request.vehicle_year, current_year));
        result.merge(Self::validate_catalog(&request.coverage_level));
        result.merge(Self::validate_catalog(&request.marital_status));
        result.merge(Self::validate_age(request.age));
        result.merge(Self::validate_catalog(&request.home_ownership));
        result.merge(Self::validate_catalog(&request.car_ownership));
        result.merge(Self::validate_catalog(&request.vehicle_value));
        result.merge(Self::validate_catalog(&request.driving_frequency));
        result.merge(Self::validate_zip_code(&request.zip_code));

        result
    }

    /// Validates and converts to a `Result` in one step
    pub fn check(request: &QuoteRequest, current_year: i32) -> Result<(), QuoteError> {
        Self::validate(request, current_year).into_result()
    }

    fn validate_age(age: i64) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if !DRIVER_AGE_RANGE.contains(&age) {
            result.add_error(format!(
                "Driver age must be between {} and {}",
                DRIVER_AGE_RANGE.start(),
                DRIVER_AGE_RANGE.end()
            ));
        }
        result
    }

    fn validate_vehicle_year(year: i64, current_year: i32) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let window = vehicle_year_window(current_year);
        if !window.contains(&year) {
            result.add_error(format!(
                "Vehicle year must be between {} and {}",
                window.start(),
                window.end()
            ));
        }
        result
    }

    fn validate_zip_code(zip_code: &str) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if zip_code.len() != 5 || !zip_code.bytes().all(|b| b.is_ascii_digit()) {
            result.add_error("ZIP code must be a 5-digit number");
        }
        result
    }

    fn validate_catalog<T: Catalog>(value: &T) -> ValidationResult {
        let mut result = ValidationResult::ok();
        if !value.is_recognized() {
            result.add_error(format!(
                "Invalid {}. Valid options: {}",
                T::FIELD,
                T::labels().join(", ")
            ));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::*;

    #[test]
    fn test_sample_request_is_valid() {
        let result = QuoteValidator::validate(&sample_request(2025), 2025);
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn test_age_bounds() {
        let mut request = sample_request(2025);
        for (age, valid) in [(15, false), (16, true), (120, true), (121, false)] {
            request.age = age;
            assert_eq!(QuoteValidator::validate(&request, 2025).is_valid(), valid, "age {age}");
        }
    }

    #[test]
    fn test_age_far_out_of_range() {
        let mut request = sample_request(2025);
        for age in [-1, 0, 5_000_000_000, i64::MIN, i64::MAX] {
            request.age = age;
            assert_eq!(
                QuoteValidator::validate(&request, 2025).errors,
                vec!["Driver age must be between 16 and 120"],
                "age {age}"
            );
        }
    }

    #[test]
    fn test_vehicle_year_far_out_of_range() {
        let mut request = sample_request(2025);
        for year in [-1, 0, 5_000_000_000, i64::MIN, i64::MAX] {
            request.vehicle_year = year;
            assert_eq!(
                QuoteValidator::validate(&request, 2025).errors,
                vec!["Vehicle year must be between 2005 and 2026"],
                "year {year}"
            );
        }
    }

    #[test]
    fn test_vehicle_year_window() {
        let mut request = sample_request(2025);
        for (year, valid) in [(2004, false), (2005, true), (2026, true), (2027, false)] {
            request.vehicle_year = year;
            assert_eq!(QuoteValidator::validate(&request, 2025).is_valid(), valid, "year {year}");
        }

        request.vehicle_year = 2030;
        let errors = QuoteValidator::validate(&request, 2025).errors;
        assert_eq!(errors, vec!["Vehicle year must be between 2005 and 2026"]);
    }

    #[test]
    fn test_zip_code_format() {
        let mut request = sample_request(2025);
        for (zip, valid) in [("02134", true), ("1234", false), ("123456", false), ("12a45", false), ("", false), ("１２３４５", false)] {
            request.zip_code = zip.to_string();
            assert_eq!(QuoteValidator::validate(&request, 2025).is_valid(), valid, "zip {zip:?}");
        }
    }

    #[test]
    fn test_catalog_message_lists_options() {
        let mut request = sample_request(2025);
        request.vehicle_category = VehicleCategory::from("Truck");

        let errors = QuoteValidator::validate(&request, 2025).errors;
        assert_eq!(
            errors,
            vec!["Invalid vehicle category. Valid options: Economy, Standard, Luxury"]
        );
    }

    #[test]
    fn test_collects_every_violation() {
        let mut request = sample_request(2025);
        request.age = 12;
        request.zip_code = "ABCDE".to_string();
        request.driving_frequency = DrivingFrequency::from("Rarely");

        let err = QuoteValidator::check(&request, 2025).unwrap_err();
        assert_eq!(
            err.details(),
            vec![
                "Driver age must be between 16 and 120".to_string(),
                "Invalid driving frequency. Valid options: Very Little, Average, A Lot".to_string(),
                "ZIP code must be a 5-digit number".to_string(),
            ]
        );
    }

    #[test]
    fn test_available_years() {
        let years = available_vehicle_years(2025);
        assert_eq!(years.len(), 21);
        assert_eq!(years.first(), Some(&2025));
        assert_eq!(years.last(), Some(&2005));
    }
}
