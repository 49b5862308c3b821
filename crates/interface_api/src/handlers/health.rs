//! Health check handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Name reported by the status endpoint
pub const SERVICE_NAME: &str = "QuoteMaster API";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// IANA name of the timezone quotes are dated in
    pub timezone: String,
    pub timestamp: DateTime<Utc>,
}

/// Service status, served at the root
pub async fn service_status(State(state): State<AppState>) -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timezone: state.config.timezone.clone(),
        timestamp: state.engine.clock().now(),
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
