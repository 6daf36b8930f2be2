//! Tests for time range parsing and calendar helpers

use chrono::{Duration, NaiveDate, TimeZone, Utc};

use crate::error::AnalyticsError;
use crate::timerange::{day_label, start_of_day, TimeRange};

fn instant(y: i32, m: u32, d: u32, h: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

#[test]
fn test_new_rejects_inverted_range() {
    let start = instant(2026, 8, 20, 0);
    assert!(TimeRange::new(start, start).is_err());
    assert!(TimeRange::new(start, start - Duration::hours(1)).is_err());
    assert!(TimeRange::new(start, start + Duration::hours(1)).is_ok());
}

#[test]
fn test_trailing_days_window() {
    let now = instant(2026, 8, 26, 15);
    let range = TimeRange::trailing_days(7, now).unwrap();

    // Starts at UTC midnight 6 days back, ends at now
    assert_eq!(range.start, instant(2026, 8, 20, 0));
    assert_eq!(range.end, now);
    assert_eq!(range.days(), 7);
}

#[test]
fn test_trailing_days_single_day() {
    let now = instant(2026, 8, 26, 15);
    let range = TimeRange::trailing_days(1, now).unwrap();
    assert_eq!(range.start, instant(2026, 8, 26, 0));
    assert_eq!(range.days(), 1);
}

#[test]
fn test_trailing_days_rejects_zero() {
    let err = TimeRange::trailing_days(0, Utc::now()).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidWindow(_)));
}

#[test]
fn test_parse_relative() {
    let range = TimeRange::parse("30d").unwrap();
    assert_eq!(range.days(), 30);

    let range = TimeRange::parse(" 7D ").unwrap();
    assert_eq!(range.days(), 7);
}

#[test]
fn test_parse_zero_days_rejected() {
    assert!(matches!(
        TimeRange::parse("0d").unwrap_err(),
        AnalyticsError::InvalidWindow(_)
    ));
}

#[test]
fn test_parse_predefined() {
    let today = TimeRange::parse("today").unwrap();
    assert_eq!(today.days(), 1);
    assert!(today.contains(Utc::now()));

    let yesterday = TimeRange::parse("yesterday").unwrap();
    assert_eq!(yesterday.days(), 1);
    assert_eq!(yesterday.end, today.start);
}

#[test]
fn test_parse_custom_range_end_inclusive() {
    let range = TimeRange::parse("2026-01-01,2026-01-31").unwrap();
    assert_eq!(range.start, instant(2026, 1, 1, 0));
    // Inclusive end date -> exclusive bound at midnight of Feb 1
    assert_eq!(range.end, instant(2026, 2, 1, 0));
    assert_eq!(range.days(), 31);
}

#[test]
fn test_parse_custom_rejects_bad_dates() {
    assert!(TimeRange::parse("2026-01-01,not-a-date").is_err());
    assert!(TimeRange::parse("01/01/2026,02/01/2026").is_err());
    // Inverted custom range
    assert!(TimeRange::parse("2026-02-01,2026-01-01").is_err());
}

#[test]
fn test_parse_unknown_format() {
    assert!(TimeRange::parse("fortnight").is_err());
    assert!(TimeRange::parse("").is_err());
}

#[test]
fn test_contains_is_half_open() {
    let range = TimeRange::new(instant(2026, 8, 20, 0), instant(2026, 8, 21, 0)).unwrap();
    assert!(range.contains(instant(2026, 8, 20, 0)));
    assert!(range.contains(instant(2026, 8, 20, 23)));
    assert!(!range.contains(instant(2026, 8, 21, 0)));
}

#[test]
fn test_start_of_day_is_utc_midnight() {
    let dt = instant(2026, 8, 26, 23);
    assert_eq!(start_of_day(dt), instant(2026, 8, 26, 0));
}

#[test]
fn test_day_label_format() {
    // 2026-08-26 is a Wednesday
    let date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
    assert_eq!(day_label(date), "Wed 26 Aug");

    // Single-digit days are not zero-padded
    let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
    assert_eq!(day_label(date), "Mon 3 Aug");
}
