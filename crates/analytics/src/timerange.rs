//! Time range parsing and calendar bucketing
//!
//! The single place where day boundaries are defined. Policy: **all day
//! boundaries are UTC**. A calendar day is `[00:00:00Z, next 00:00:00Z)` and
//! every rollup window is half-open `[start, end)`, so an order stamped
//! exactly at `end` never counts.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::error::{AnalyticsError, Result};

/// A half-open `[start, end)` UTC time range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    /// Start of the range (inclusive)
    pub start: DateTime<Utc>,
    /// End of the range (exclusive)
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a new time range
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(AnalyticsError::InvalidTimeRange(
                "end must be after start".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Trailing window of `days` calendar days ending at `now`
    ///
    /// Starts at UTC midnight `days - 1` days before `now` and ends at `now`,
    /// so the window covers exactly `days` (possibly partial last) calendar
    /// days. This is the window a [`crate::series::DailySeries`] of the same
    /// `days` and `now` covers.
    pub fn trailing_days(days: u32, now: DateTime<Utc>) -> Result<Self> {
        if days == 0 {
            return Err(AnalyticsError::InvalidWindow(
                "day count must be positive".to_string(),
            ));
        }
        let start = start_of_day(now) - Duration::days(i64::from(days) - 1);
        Self::new(start, now)
    }

    /// Parse a time range string
    ///
    /// Supported formats:
    /// - Relative: `7d`, `30d`, `90d` (trailing windows ending now)
    /// - Predefined: `today`, `yesterday`
    /// - Custom: `2024-01-01,2024-01-31` (end date inclusive)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        let now = Utc::now();

        if let Some(range) = Self::parse_predefined(&s, now)? {
            return Ok(range);
        }

        if let Some(range) = Self::parse_relative(&s, now)? {
            return Ok(range);
        }

        if let Some(range) = Self::parse_custom(&s)? {
            return Ok(range);
        }

        Err(AnalyticsError::InvalidTimeRange(format!(
            "unknown time range format: {}",
            s
        )))
    }

    /// Get the duration of this range
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Number of calendar days this range touches
    pub fn days(&self) -> i64 {
        let first = self.start.date_naive();
        // end is exclusive, so an end exactly at midnight belongs to the
        // previous day
        let last = (self.end - Duration::nanoseconds(1)).date_naive();
        (last - first).num_days() + 1
    }

    /// Whether an instant falls inside `[start, end)`
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }
}

impl TimeRange {
    fn parse_predefined(s: &str, now: DateTime<Utc>) -> Result<Option<Self>> {
        let today = start_of_day(now);
        match s {
            "today" => Self::new(today, today + Duration::days(1)).map(Some),
            "yesterday" => Self::new(today - Duration::days(1), today).map(Some),
            _ => Ok(None),
        }
    }

    fn parse_relative(s: &str, now: DateTime<Utc>) -> Result<Option<Self>> {
        let Some(num_str) = s.strip_suffix('d') else {
            return Ok(None);
        };
        let Ok(days) = num_str.parse::<u32>() else {
            return Ok(None);
        };
        if days == 0 {
            return Err(AnalyticsError::InvalidWindow(
                "day count must be positive".to_string(),
            ));
        }
        Self::trailing_days(days, now).map(Some)
    }

    fn parse_custom(s: &str) -> Result<Option<Self>> {
        // Format: 2024-01-01,2024-01-31
        let Some((start_str, end_str)) = s.split_once(',') else {
            return Ok(None);
        };

        let start_date = parse_date(start_str.trim())?;
        let end_date = parse_date(end_str.trim())?;

        // End date is inclusive on the wire, half-open internally
        let start = start_of_date(start_date);
        let end = start_of_date(end_date) + Duration::days(1);

        Self::new(start, end).map(Some)
    }
}

// Calendar helpers. Everything below is UTC by construction.

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        AnalyticsError::InvalidTimeRange(format!("invalid date format: {} (use YYYY-MM-DD)", s))
    })
}

/// UTC midnight of the instant's calendar day
pub fn start_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    start_of_date(dt.date_naive())
}

/// UTC midnight of a calendar date
pub fn start_of_date(date: NaiveDate) -> DateTime<Utc> {
    // Midnight always exists for a valid NaiveDate
    date.and_hms_opt(0, 0, 0)
        .map(|t| t.and_utc())
        .unwrap_or_else(|| DateTime::<Utc>::from_timestamp_nanos(0))
}

/// Stable bucket key for a calendar day (`YYYY-MM-DD`)
pub fn day_key(dt: DateTime<Utc>) -> NaiveDate {
    dt.date_naive()
}

/// Chart label for a calendar day, e.g. `"Tue 26 Aug"`
pub fn day_label(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.format("%a"),
        date.day(),
        date.format("%b")
    )
}
