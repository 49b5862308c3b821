//! Test Data Builders
//!
//! Provides a builder for quote requests with sensible defaults. Tests
//! specify only the fields they care about; everything else comes from the
//! sample profile for the quoting year.

use domain_quote::{
    sample_request, CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus,
    QuoteRequest, VehicleCategory, VehicleValue,
};
use serde_json::{json, Value};

use crate::fixtures::QUOTING_YEAR;

/// Builder for constructing quote requests
pub struct QuoteRequestBuilder {
    request: QuoteRequest,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Starts from the sample profile for the quoting year
    pub fn new() -> Self {
        Self {
            request: sample_request(QUOTING_YEAR),
        }
    }

    pub fn vehicle_category(mut self, category: impl Into<VehicleCategory>) -> Self {
        self.request.vehicle_category = category.into();
        self
    }

    pub fn vehicle_year(mut self, year: impl Into<i64>) -> Self {
        self.request.vehicle_year = year.into();
        self
    }

    pub fn coverage_level(mut self, level: impl Into<CoverageLevel>) -> Self {
        self.request.coverage_level = level.into();
        self
    }

    pub fn marital_status(mut self, status: impl Into<MaritalStatus>) -> Self {
        self.request.marital_status = status.into();
        self
    }

    pub fn age(mut self, age: impl Into<i64>) -> Self {
        self.request.age = age.into();
        self
    }

    pub fn home_ownership(mut self, ownership: impl Into<HomeOwnership>) -> Self {
        self.request.home_ownership = ownership.into();
        self
    }

    pub fn car_ownership(mut self, ownership: impl Into<CarOwnership>) -> Self {
        self.request.car_ownership = ownership.into();
        self
    }

    pub fn vehicle_value(mut self, value: impl Into<VehicleValue>) -> Self {
        self.request.vehicle_value = value.into();
        self
    }

    pub fn driving_frequency(mut self, frequency: impl Into<DrivingFrequency>) -> Self {
        self.request.driving_frequency = frequency.into();
        self
    }

    pub fn zip_code(mut self, zip: impl Into<String>) -> Self {
        self.request.zip_code = zip.into();
        self
    }

    /// Builds the request
    pub fn build(self) -> QuoteRequest {
        self.request
    }

    /// Builds the request as the JSON body a client would post
    pub fn build_json(self) -> Value {
        let r = self.request;
        json!({
            "vehicle_category": r.vehicle_category.to_string(),
            "vehicle_year": r.vehicle_year,
            "coverage_level": r.coverage_level.to_string(),
            "marital_status": r.marital_status.to_string(),
            "age": r.age,
            "home_ownership": r.home_ownership.to_string(),
            "car_ownership": r.car_ownership.to_string(),
            "vehicle_value": r.vehicle_value.to_string(),
            "driving_frequency": r.driving_frequency.to_string(),
            "zip_code": r.zip_code,
        })
    }
}
