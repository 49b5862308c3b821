//! HTTP API Tests
//!
//! Drives the router in-process with axum-test against a pinned clock.
//!
//! # Test Organization
//!
//! - `status_tests` - Service status and health endpoints
//! - `option_tests` - Option listings for the quote form
//! - `quote_tests` - Quote calculation and validation errors
//! - `explanation_tests` - Coverage, pricing factor and discount explanations

use axum::http::StatusCode;
use axum_test::TestServer;
use interface_api::{config::ApiConfig, create_router};
use serde_json::{json, Value};
use test_utils::{ClockFixtures, QuoteRequestBuilder, QUOTING_YEAR};

fn server() -> TestServer {
    TestServer::new(create_router(ClockFixtures::engine(), ApiConfig::default())).unwrap()
}

/// Asserts a JSON number matches to the cent
fn assert_amount(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap_or_else(|| panic!("expected a number, got {value}"));
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

// ============================================================================
// STATUS TESTS
// ============================================================================

mod status_tests {
    use super::*;

    /// Verifies the root reports service name and the clock's timestamp
    #[tokio::test]
    async fn test_service_status() {
        let response = server().get("/").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "QuoteMaster API");
        assert_eq!(body["timezone"], "UTC");
        assert!(body["timestamp"].as_str().unwrap().starts_with("2025-06-15T12:00:00"));
    }

    /// Verifies the root reports the configured quoting timezone
    #[tokio::test]
    async fn test_service_status_reports_timezone() {
        let config = ApiConfig {
            timezone: "America/Chicago".to_string(),
            ..ApiConfig::default()
        };
        let server = TestServer::new(create_router(ClockFixtures::engine(), config)).unwrap();

        let body: Value = server.get("/").await.json();
        assert_eq!(body["timezone"], "America/Chicago");
    }

    /// Verifies the liveness endpoint
    #[tokio::test]
    async fn test_health_check() {
        let response = server().get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    /// Verifies every response carries a request id
    #[tokio::test]
    async fn test_request_id_propagated() {
        let response = server().get("/health").await;
        assert!(response.headers().get("x-request-id").is_some());
    }
}

// ============================================================================
// OPTION LISTING TESTS
// ============================================================================

mod option_tests {
    use super::*;

    /// Verifies years run from the current year back twenty years
    #[tokio::test]
    async fn test_vehicle_years() {
        let years: Vec<i32> = server().get("/vehicle-years").await.json();

        assert_eq!(years.len(), 21);
        assert_eq!(years[0], QUOTING_YEAR);
        assert_eq!(years[20], QUOTING_YEAR - 20);
    }

    /// Verifies each catalog is listed with its display labels in order
    #[tokio::test]
    async fn test_catalog_listings() {
        let server = server();
        let cases = [
            ("/vehicle-categories", json!(["Economy", "Standard", "Luxury"])),
            ("/coverage-levels", json!(["Basic", "Standard", "Premium"])),
            ("/marital-statuses", json!(["Single", "Married", "Divorced", "Widowed"])),
            ("/home-ownership-options", json!(["Own", "Rent", "Other"])),
            ("/car-ownership-options", json!(["Own", "Lease", "Finance"])),
            (
                "/vehicle-value-ranges",
                json!(["Under $5,000", "$5,000 - $40,000", "Over $40,000"]),
            ),
            ("/driving-frequency-options", json!(["Very Little", "Average", "A Lot"])),
        ];

        for (path, expected) in cases {
            let body: Value = server.get(path).await.json();
            assert_eq!(body, expected, "listing at {path}");
        }
    }
}

// ============================================================================
// QUOTE TESTS
// ============================================================================

mod quote_tests {
    use super::*;

    /// Verifies the worked example end to end
    #[tokio::test]
    async fn test_calculate_quote() {
        let request = QuoteRequestBuilder::new()
            .vehicle_year(QUOTING_YEAR)
            .coverage_level("Basic")
            .age(40)
            .home_ownership("Rent")
            .build_json();

        let response = server().post("/calculate-quote").json(&request).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_amount(&body["base_premium"], 500.0);
        assert_amount(&body["location_factor"], 1.23);
        assert_amount(&body["vehicle_factor"], 1.2);
        assert_amount(&body["subtotal"], 666.36);
        assert_amount(&body["total_discounts"], 150.0);
        assert_amount(&body["final_premium"], 516.36);
        assert_eq!(body["quote_id"], "QM-20250615-4821");
        assert_eq!(body["expiration_date"], "2025-07-15");
        assert_eq!(body["zip_code"], "90210");
        assert_eq!(body["coverage_level"], "Basic");
    }

    /// Verifies coverage line items use `amount` for the limit wording
    #[tokio::test]
    async fn test_coverage_line_items() {
        let request = QuoteRequestBuilder::new().coverage_level("Basic").build_json();
        let body: Value = server().post("/calculate-quote").json(&request).await.json();

        let coverages = body["coverages"].as_array().unwrap();
        assert_eq!(coverages.len(), 3);
        assert_eq!(coverages[0]["name"], "Bodily Injury Liability");
        assert_eq!(coverages[0]["amount"], "$15,000/$30,000");
        assert_amount(&coverages[0]["premium"], 250.0);
    }

    /// Verifies out-of-range fields are all reported with 422
    #[tokio::test]
    async fn test_validation_errors() {
        let request = QuoteRequestBuilder::new()
            .age(15)
            .zip_code("9021")
            .vehicle_category("Truck")
            .build_json();

        let response = server().post("/calculate-quote").json(&request).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(
            body["details"],
            json!([
                "Invalid vehicle category. Valid options: Economy, Standard, Luxury",
                "Driver age must be between 16 and 120",
                "ZIP code must be a 5-digit number"
            ])
        );
    }

    /// Verifies next year's models are accepted and older ones are not
    #[tokio::test]
    async fn test_vehicle_year_window() {
        let server = server();

        let next_year = QuoteRequestBuilder::new().vehicle_year(QUOTING_YEAR + 1).build_json();
        server.post("/calculate-quote").json(&next_year).await.assert_status_ok();

        let too_old = QuoteRequestBuilder::new().vehicle_year(QUOTING_YEAR - 21).build_json();
        let response = server.post("/calculate-quote").json(&too_old).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.json::<Value>()["details"],
            json!(["Vehicle year must be between 2005 and 2026"])
        );
    }

    /// Verifies ages outside every integer width still get the age message
    #[tokio::test]
    async fn test_age_far_out_of_range() {
        let server = server();

        for age in [json!(-1), json!(5_000_000_000i64)] {
            let mut request = QuoteRequestBuilder::new().build_json();
            request["age"] = age.clone();

            let response = server.post("/calculate-quote").json(&request).await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

            let body: Value = response.json();
            assert_eq!(body["error"], "validation_error", "age {age}");
            assert_eq!(body["details"], json!(["Driver age must be between 16 and 120"]));
        }
    }

    /// Verifies a vehicle year beyond 32 bits gets the year message
    #[tokio::test]
    async fn test_vehicle_year_far_out_of_range() {
        let mut request = QuoteRequestBuilder::new().build_json();
        request["vehicle_year"] = json!(99_999_999_999i64);

        let response = server().post("/calculate-quote").json(&request).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.json::<Value>()["details"],
            json!(["Vehicle year must be between 2005 and 2026"])
        );
    }

    /// Verifies a body missing fields is a bad request
    #[tokio::test]
    async fn test_malformed_body() {
        let response = server()
            .post("/calculate-quote")
            .json(&json!({ "vehicle_category": "Standard" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "bad_request");
    }
}

// ============================================================================
// EXPLANATION TESTS
// ============================================================================

mod explanation_tests {
    use super::*;

    /// Verifies a single tier lists only its coverages
    #[tokio::test]
    async fn test_coverage_explanation_for_level() {
        let response = server()
            .get("/coverage-explanation")
            .add_query_param("coverage_level", "Basic")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["coverage_level"], "Basic");
        assert_eq!(body["coverages"].as_array().unwrap().len(), 3);
    }

    /// Verifies all tiers are described without a level
    #[tokio::test]
    async fn test_coverage_explanation_all_levels() {
        let body: Value = server().get("/coverage-explanation").await.json();

        assert_eq!(body["coverage_levels"].as_array().unwrap().len(), 3);
        assert_eq!(body["coverages"].as_array().unwrap().len(), 6);
    }

    /// Verifies an empty tier is treated as no tier
    #[tokio::test]
    async fn test_coverage_explanation_empty_level() {
        let response = server()
            .get("/coverage-explanation")
            .add_query_param("coverage_level", "")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["coverage_levels"].as_array().unwrap().len(), 3);
        assert_eq!(body["coverages"].as_array().unwrap().len(), 6);
    }

    /// Verifies an unknown tier is rejected
    #[tokio::test]
    async fn test_coverage_explanation_unknown_level() {
        let response = server()
            .get("/coverage-explanation")
            .add_query_param("coverage_level", "Gold")
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    /// Verifies pricing factors and discounts are served
    #[tokio::test]
    async fn test_pricing_factors_and_discounts() {
        let server = server();

        let factors: Value = server.get("/pricing-factors").await.json();
        assert_eq!(factors["age_factors"]["entries"][0]["impact"], "2.0x (highest risk)");

        let discounts: Value = server.get("/discounts").await.json();
        assert_eq!(discounts.as_array().unwrap().len(), 6);
        assert_eq!(discounts[0]["typical_amount"], "$75.00");
    }

    /// Verifies the sample request is dated to the clock and quotes cleanly
    #[tokio::test]
    async fn test_sample_quote_request_round_trip() {
        let server = server();

        let sample: Value = server.get("/sample-quote-request").await.json();
        assert_eq!(sample["vehicle_year"], json!(QUOTING_YEAR - 3));
        assert_eq!(sample["vehicle_value"], "$5,000 - $40,000");

        let quote: Value = server.post("/calculate-quote").json(&sample).await.json();
        assert_amount(&quote["final_premium"], 1254.32);
    }
}
