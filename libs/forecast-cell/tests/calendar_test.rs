use std::io::Write;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

use forecast_cell::{
    is_non_working_day, resolve_daily_context, ForecastError, ForecastRequest, HolidayCalendar,
    Weather,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_year_end_window_overrides_weekday() {
    let calendar = HolidayCalendar::empty();

    // 2026-12-30 is a Wednesday; non-working purely via the year-end window.
    assert!(is_non_working_day(date(2026, 12, 30), &calendar));
    assert!(is_non_working_day(date(2026, 12, 29), &calendar));
    assert!(is_non_working_day(date(2026, 12, 31), &calendar));
}

#[test]
fn test_new_year_window_overrides_weekday() {
    let calendar = HolidayCalendar::empty();

    // 2026-01-02 is a Friday; non-working purely via the new-year window.
    assert!(is_non_working_day(date(2026, 1, 2), &calendar));
    assert!(is_non_working_day(date(2026, 1, 1), &calendar));
    assert!(is_non_working_day(date(2026, 1, 3), &calendar));
}

#[test]
fn test_window_edges_are_exclusive() {
    let calendar = HolidayCalendar::empty();

    // Dec 28 2026 (Monday) and Jan 5 2026 (Monday) sit just outside the window.
    assert!(!is_non_working_day(date(2026, 12, 28), &calendar));
    assert!(!is_non_working_day(date(2026, 1, 5), &calendar));
}

#[test]
fn test_plain_wednesday_is_working() {
    let calendar = HolidayCalendar::empty();
    assert!(!is_non_working_day(date(2026, 8, 5), &calendar));
}

#[test]
fn test_weekends_are_non_working() {
    let calendar = HolidayCalendar::empty();

    assert!(is_non_working_day(date(2026, 8, 8), &calendar)); // Saturday
    assert!(is_non_working_day(date(2026, 8, 9), &calendar)); // Sunday
}

#[test]
fn test_registered_public_holiday_is_non_working() {
    let holiday = date(2026, 8, 5);
    let calendar = HolidayCalendar::from_entries([(holiday, "Hospital Founding Day".to_string())]);

    assert!(is_non_working_day(holiday, &calendar));
    assert!(!is_non_working_day(date(2026, 8, 6), &calendar));
}

#[test]
fn test_calendar_loads_from_json_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"{{"2026-01-01": "New Year's Day", "2026-02-11": "National Foundation Day"}}"#
    )
    .expect("Failed to write holiday data");

    let calendar = HolidayCalendar::from_file(file.path()).expect("Failed to load calendar");

    assert_eq!(calendar.len(), 2);
    assert!(calendar.is_public_holiday(date(2026, 2, 11)));
    assert!(!calendar.is_public_holiday(date(2026, 2, 12)));
}

#[test]
fn test_calendar_missing_file_fails_to_load() {
    let result = HolidayCalendar::from_file("/nonexistent/holidays.json");
    assert!(result.is_err(), "Missing holiday data should fail to load");
}

#[test]
fn test_resolve_rejects_volume_above_range() {
    let request = ForecastRequest {
        target_date: date(2026, 8, 4),
        total_daily_patients: 5001,
        weather: Weather::Clear,
    };

    let result = resolve_daily_context(&request, &HolidayCalendar::empty());
    assert_matches!(result.unwrap_err(), ForecastError::InvalidInput(_));
}

#[test]
fn test_resolve_accepts_range_boundaries() {
    let calendar = HolidayCalendar::empty();

    for volume in [0, 5000] {
        let request = ForecastRequest {
            target_date: date(2026, 8, 4),
            total_daily_patients: volume,
            weather: Weather::Clear,
        };
        assert!(resolve_daily_context(&request, &calendar).is_ok());
    }
}

#[test]
fn test_resolve_classifies_target_and_previous_day() {
    let calendar = HolidayCalendar::empty();

    // Tuesday after a working Monday.
    let request = ForecastRequest {
        target_date: date(2026, 8, 4),
        total_daily_patients: 1200,
        weather: Weather::Clear,
    };
    let ctx = resolve_daily_context(&request, &calendar).expect("context");
    assert!(!ctx.is_target_holiday);
    assert!(!ctx.is_prev_day_holiday);
    assert_eq!(ctx.total_daily_patients, 1200);

    // Monday after a Sunday: previous day flagged, target working.
    let request = ForecastRequest {
        target_date: date(2026, 8, 10),
        total_daily_patients: 1200,
        weather: Weather::Clear,
    };
    let ctx = resolve_daily_context(&request, &calendar).expect("context");
    assert!(!ctx.is_target_holiday);
    assert!(ctx.is_prev_day_holiday);

    // Jan 2 after Jan 1: both inside the new-year window.
    let request = ForecastRequest {
        target_date: date(2026, 1, 2),
        total_daily_patients: 1200,
        weather: Weather::Clear,
    };
    let ctx = resolve_daily_context(&request, &calendar).expect("context");
    assert!(ctx.is_target_holiday);
    assert!(ctx.is_prev_day_holiday);
}
