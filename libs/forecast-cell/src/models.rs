use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on the expected daily patient volume accepted by the API.
pub const MAX_DAILY_PATIENTS: u32 = 5000;

/// The fixed forecast window: [08:00, 18:00] in 30-minute steps, 21 slots.
pub const SLOT_MINUTES: i64 = 30;
pub const SLOT_COUNT: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Clear,
    MostlyClear,
    Cloudy,
    Overcast,
    Rain,
    Snow,
}

impl Weather {
    pub fn is_rain(self) -> bool {
        matches!(self, Weather::Rain)
    }

    pub fn is_snow(self) -> bool {
        matches!(self, Weather::Snow)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastRequest {
    pub target_date: NaiveDate,
    pub total_daily_patients: u32,
    pub weather: Weather,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub forecast_id: Uuid,
    pub target_date: NaiveDate,
    pub is_holiday: bool,
    pub is_prev_day_holiday: bool,
    pub slots: Vec<SlotResult>,
}

/// Static context for one simulation run. Computed once from the request
/// before the slot loop; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyContext {
    pub target_date: NaiveDate,
    pub is_target_holiday: bool,
    pub is_prev_day_holiday: bool,
    pub weather: Weather,
    pub total_daily_patients: u32,
}

/// A half-hour-aligned point inside the daily forecast window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlotTimestamp {
    time: NaiveTime,
}

impl SlotTimestamp {
    /// The 21 ordered slots of the fixed daily window.
    pub fn daily_window() -> Vec<SlotTimestamp> {
        let open = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let close = NaiveTime::from_hms_opt(18, 0, 0).unwrap();

        let mut slots = Vec::with_capacity(SLOT_COUNT);
        let mut current = open;
        loop {
            slots.push(SlotTimestamp { time: current });
            if current == close {
                break;
            }
            current += Duration::minutes(SLOT_MINUTES);
        }
        slots
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// Mutable state carried from one slot into the next: the last three
/// predicted arrival counts (most recent first) and the predicted queue size
/// entering the current slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollingState {
    pub recent_arrivals: [u32; 3],
    pub queue_carry: u32,
}

impl RollingState {
    /// Rotate in this slot's predictions: the new arrival count displaces the
    /// oldest lag entry, and the predicted queue becomes the next carry.
    pub fn advance(&mut self, reception: u32, queue_pred: u32) {
        self.recent_arrivals = [
            reception,
            self.recent_arrivals[0],
            self.recent_arrivals[1],
        ];
        self.queue_carry = queue_pred;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResult {
    pub time_label: String,
    pub predicted_arrivals: u32,
    pub predicted_queue: u32,
    pub predicted_wait_minutes: u32,
}

/// Ordered per-slot results for one day, the sole output artifact of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayForecast {
    pub slots: Vec<SlotResult>,
}

impl DayForecast {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
