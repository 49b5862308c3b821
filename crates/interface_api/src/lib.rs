//! HTTP API Layer
//!
//! This crate provides the REST API for the quoting service using Axum.
//! It validates requests and serializes results; all pricing lives in
//! `domain_quote`.
//!
//! # Architecture
//!
//! - **Handlers**: Status, option listings, quoting and explanations
//! - **Middleware**: Request ids, tracing, audit logging, panic recovery
//! - **DTOs**: Flat quote response with money as JSON numbers
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(QuoteEngine::system(timezone), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_quote::{
    CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus, QuoteEngine,
    VehicleCategory, VehicleValue,
};

use crate::config::ApiConfig;
use crate::handlers::{catalog, explanation, health, quote};
use crate::middleware::{audit_middleware, handle_panic};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub engine: QuoteEngine,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `engine` - Quote engine carrying the reference clock and random source
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(engine: QuoteEngine, config: ApiConfig) -> Router {
    let state = AppState { config, engine };

    let status_routes = Router::new()
        .route("/", get(health::service_status))
        .route("/health", get(health::health_check));

    let option_routes = Router::new()
        .route("/vehicle-years", get(catalog::vehicle_years))
        .route("/vehicle-categories", get(catalog::options::<VehicleCategory>))
        .route("/coverage-levels", get(catalog::options::<CoverageLevel>))
        .route("/marital-statuses", get(catalog::options::<MaritalStatus>))
        .route("/home-ownership-options", get(catalog::options::<HomeOwnership>))
        .route("/car-ownership-options", get(catalog::options::<CarOwnership>))
        .route("/vehicle-value-ranges", get(catalog::options::<VehicleValue>))
        .route("/driving-frequency-options", get(catalog::options::<DrivingFrequency>));

    let quote_routes = Router::new()
        .route("/calculate-quote", post(quote::calculate_quote))
        .route("/coverage-explanation", get(explanation::coverage_explanation))
        .route("/pricing-factors", get(explanation::pricing_factors))
        .route("/discounts", get(explanation::discounts))
        .route("/sample-quote-request", get(explanation::sample_quote_request));

    Router::new()
        .merge(status_routes)
        .merge(option_routes)
        .merge(quote_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
