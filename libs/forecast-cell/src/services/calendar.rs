use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::ForecastError;
use crate::models::{DailyContext, ForecastRequest, MAX_DAILY_PATIENTS};

/// Externally maintained public-holiday table, a date -> holiday-name map
/// persisted as JSON.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    holidays: HashMap<NaiveDate, String>,
}

impl HolidayCalendar {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (NaiveDate, String)>) -> Self {
        Self {
            holidays: entries.into_iter().collect(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read holiday data at {}", path.display()))?;
        let holidays: HashMap<NaiveDate, String> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse holiday data at {}", path.display()))?;

        debug!("Loaded {} public holidays from {}", holidays.len(), path.display());
        Ok(Self { holidays })
    }

    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

/// A date counts as non-working when it is a registered public holiday, a
/// weekend day, or falls in the fixed year-end/new-year closure window
/// (Dec 29 - Jan 3).
pub fn is_non_working_day(date: NaiveDate, calendar: &HolidayCalendar) -> bool {
    calendar.is_public_holiday(date)
        || matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
        || (date.month() == 12 && date.day() >= 29)
        || (date.month() == 1 && date.day() <= 3)
}

/// Validate a request and classify the target and previous dates into the
/// immutable context every slot of the run will see.
pub fn resolve_daily_context(
    request: &ForecastRequest,
    calendar: &HolidayCalendar,
) -> Result<DailyContext, ForecastError> {
    if request.total_daily_patients > MAX_DAILY_PATIENTS {
        return Err(ForecastError::InvalidInput(format!(
            "total_daily_patients must be at most {}, got {}",
            MAX_DAILY_PATIENTS, request.total_daily_patients
        )));
    }

    let prev_date = request.target_date.pred_opt().ok_or_else(|| {
        ForecastError::InvalidInput(format!(
            "target_date {} has no previous day",
            request.target_date
        ))
    })?;

    Ok(DailyContext {
        target_date: request.target_date,
        is_target_holiday: is_non_working_day(request.target_date, calendar),
        is_prev_day_holiday: is_non_working_day(prev_date, calendar),
        weather: request.weather,
        total_daily_patients: request.total_daily_patients,
    })
}
