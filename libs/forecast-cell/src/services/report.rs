use crate::models::{DayForecast, SlotResult};

/// Assemble per-slot results into the day report. Pure, order-preserving.
pub fn to_report(slot_results: Vec<SlotResult>) -> DayForecast {
    DayForecast {
        slots: slot_results,
    }
}
