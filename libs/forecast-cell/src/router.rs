use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{get_forecast_window, run_forecast};
use crate::state::AppState;

pub fn create_forecast_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(run_forecast))
        .route("/window", get(get_forecast_window))
        .with_state(state)
}
