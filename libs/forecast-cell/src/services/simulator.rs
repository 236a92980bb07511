use tracing::debug;

use model_registry_cell::{FeatureSchema, Predictor};

use crate::error::ForecastError;
use crate::models::{DailyContext, DayForecast, RollingState, SlotResult, SlotTimestamp};
use crate::services::features::{build_arrival_vector, build_queue_wait_vector};
use crate::services::report::to_report;

/// Recursive slot simulator: walks the fixed daily window in order, feeding
/// each slot's predictions forward into the next slot's feature vectors.
///
/// Slots are strictly sequential; a slot's queue/wait prediction consumes the
/// arrival count just predicted for that same slot, and its queue-at-start is
/// exactly the previous slot's predicted queue.
pub struct SimulationEngine<'a> {
    arrival_schema: &'a FeatureSchema,
    queue_wait_schema: &'a FeatureSchema,
    arrival_model: &'a dyn Predictor,
    queue_model: &'a dyn Predictor,
    wait_model: &'a dyn Predictor,
}

impl<'a> SimulationEngine<'a> {
    pub fn new(
        arrival_schema: &'a FeatureSchema,
        queue_wait_schema: &'a FeatureSchema,
        arrival_model: &'a dyn Predictor,
        queue_model: &'a dyn Predictor,
        wait_model: &'a dyn Predictor,
    ) -> Self {
        Self {
            arrival_schema,
            queue_wait_schema,
            arrival_model,
            queue_model,
            wait_model,
        }
    }

    /// Run the full-day simulation. Any predictor failure aborts the whole
    /// run; no partial forecast is returned.
    pub fn run(&self, ctx: &DailyContext) -> Result<DayForecast, ForecastError> {
        debug!(
            "Simulating {} (holiday: {}, prev holiday: {}, patients: {})",
            ctx.target_date, ctx.is_target_holiday, ctx.is_prev_day_holiday, ctx.total_daily_patients
        );

        let slots = SlotTimestamp::daily_window();
        let mut state = RollingState::default();
        let mut results = Vec::with_capacity(slots.len());

        for slot in slots {
            let arrival_vector = build_arrival_vector(self.arrival_schema, ctx, slot, &state)?;
            let reception = clamp_round(self.arrival_model.predict(&arrival_vector)?);

            let queue_wait_vector =
                build_queue_wait_vector(self.queue_wait_schema, ctx, slot, reception, &state)?;
            let queue_pred = clamp_round(self.queue_model.predict(&queue_wait_vector)?);
            let wait_pred = clamp_round(self.wait_model.predict(&queue_wait_vector)?);

            results.push(SlotResult {
                time_label: slot.label(),
                predicted_arrivals: reception,
                predicted_queue: queue_pred,
                predicted_wait_minutes: wait_pred,
            });

            state.advance(reception, queue_pred);
        }

        debug!("Simulated {} slots for {}", results.len(), ctx.target_date);
        Ok(to_report(results))
    }
}

// Raw model outputs may be negative or fractional; every prediction is
// rounded then floored at zero before it is emitted or fed forward.
fn clamp_round(raw: f64) -> u32 {
    raw.round().max(0.0) as u32
}
