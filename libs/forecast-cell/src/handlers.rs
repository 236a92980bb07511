use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::error::ForecastError;
use crate::models::{ForecastRequest, ForecastResponse, SlotTimestamp, SLOT_MINUTES};
use crate::services::calendar::resolve_daily_context;
use crate::services::simulator::SimulationEngine;
use crate::state::AppState;

/// Run a same-day forecast simulation for the requested date.
pub async fn run_forecast(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, AppError> {
    info!(
        "Forecast request for {} ({} expected patients)",
        request.target_date, request.total_daily_patients
    );

    let ctx = resolve_daily_context(&request, &state.calendar).map_err(|e| {
        error!("Rejected forecast request: {}", e);
        AppError::BadRequest(e.to_string())
    })?;

    let registry = &state.registry;
    let engine = SimulationEngine::new(
        &registry.arrival_schema,
        &registry.queue_wait_schema,
        &registry.arrival_model,
        &registry.queue_model,
        &registry.wait_model,
    );

    let forecast = engine.run(&ctx).map_err(|e| {
        error!("Forecast simulation failed: {}", e);
        match e {
            ForecastError::InvalidInput(_) => AppError::BadRequest(e.to_string()),
            _ => AppError::Internal("Forecast simulation failed".to_string()),
        }
    })?;

    Ok(Json(ForecastResponse {
        forecast_id: Uuid::new_v4(),
        target_date: ctx.target_date,
        is_holiday: ctx.is_target_holiday,
        is_prev_day_holiday: ctx.is_prev_day_holiday,
        slots: forecast.slots,
    }))
}

/// Describe the fixed daily forecast window.
pub async fn get_forecast_window() -> Json<Value> {
    let labels: Vec<String> = SlotTimestamp::daily_window()
        .iter()
        .map(|slot| slot.label())
        .collect();

    Json(json!({
        "open": labels.first(),
        "close": labels.last(),
        "slot_minutes": SLOT_MINUTES,
        "slots": labels,
    }))
}
