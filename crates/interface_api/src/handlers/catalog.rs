//! Option listings for building a quote form

use axum::{extract::State, Json};

use domain_quote::{available_vehicle_years, Catalog};

use crate::AppState;

/// Model years offered for selection, newest first
pub async fn vehicle_years(State(state): State<AppState>) -> Json<Vec<i32>> {
    Json(available_vehicle_years(state.engine.clock().current_year()))
}

/// Labels of one catalog, in display order
pub async fn options<T: Catalog>() -> Json<Vec<&'static str>> {
    Json(T::labels())
}
