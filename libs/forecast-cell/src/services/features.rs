use model_registry_cell::{FeatureSchema, FeatureVector};

use crate::error::ForecastError;
use crate::models::{DailyContext, RollingState, SlotTimestamp};

/// Lag features of the arrival model, most recent first. The queue/wait
/// model never consumes lag history directly, only the freshly predicted
/// reception count.
const LAG_FIELDS: [&str; 3] = ["lag_30min", "lag_60min", "lag_90min"];

/// Input vector for the arrival-count model.
///
/// Starts all-zero in schema order; only the fields named below are
/// overwritten. A schema missing an optional field simply keeps the zero
/// (lenient-schema policy); `hour` and `minute` are structurally required.
pub fn build_arrival_vector(
    schema: &FeatureSchema,
    ctx: &DailyContext,
    slot: SlotTimestamp,
    state: &RollingState,
) -> Result<FeatureVector, ForecastError> {
    let mut vector = schema.zeroed();

    set_required(&mut vector, schema, "hour", slot.hour() as f64)?;
    set_required(&mut vector, schema, "minute", slot.minute() as f64)?;
    set_context_fields(&mut vector, schema, ctx);

    for (field, lag) in LAG_FIELDS.iter().zip(state.recent_arrivals.iter()) {
        vector.set(schema, field, *lag as f64);
    }

    Ok(vector)
}

/// Input vector for the queue-size and wait-time models. Both models score
/// the same vector.
pub fn build_queue_wait_vector(
    schema: &FeatureSchema,
    ctx: &DailyContext,
    slot: SlotTimestamp,
    reception_count: u32,
    state: &RollingState,
) -> Result<FeatureVector, ForecastError> {
    let mut vector = schema.zeroed();

    set_required(&mut vector, schema, "hour", slot.hour() as f64)?;
    set_required(&mut vector, schema, "minute", slot.minute() as f64)?;
    vector.set(schema, "reception_count", reception_count as f64);
    vector.set(schema, "queue_at_start_of_slot", state.queue_carry as f64);
    set_context_fields(&mut vector, schema, ctx);

    Ok(vector)
}

fn set_context_fields(vector: &mut FeatureVector, schema: &FeatureSchema, ctx: &DailyContext) {
    vector.set(schema, "is_holiday", flag(ctx.is_target_holiday));
    vector.set(
        schema,
        "total_outpatient_count",
        ctx.total_daily_patients as f64,
    );
    vector.set(schema, "prev_day_holiday_flag", flag(ctx.is_prev_day_holiday));
    vector.set(schema, "rain_flag", flag(ctx.weather.is_rain()));
    vector.set(schema, "snow_flag", flag(ctx.weather.is_snow()));
}

fn set_required(
    vector: &mut FeatureVector,
    schema: &FeatureSchema,
    field: &str,
    value: f64,
) -> Result<(), ForecastError> {
    if !vector.set(schema, field, value) {
        return Err(ForecastError::SchemaMismatch {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
