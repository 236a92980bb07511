use std::sync::Arc;

use axum::{routing::get, Router};

use forecast_cell::{create_forecast_router, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Outpatient Forecast API is running!" }))
        .nest("/api/v1/forecast", create_forecast_router(state))
}
