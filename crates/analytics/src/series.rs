//! Daily sales time series
//!
//! Produces the fixed-length label/value arrays the dashboard chart consumes.
//! The series always has exactly N entries in ascending date order, ending on
//! today's UTC date; days without sales are zero-filled, never omitted.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use pulse_model::{Order, OrderStatus, SupplierId};

use crate::timerange::{day_key, day_label};

/// A fixed-length daily series of earnings
///
/// `labels[i]` and `data[i]` describe the same calendar day; consumers align
/// the two arrays by index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    /// Display labels, one per day, ascending
    pub labels: Vec<String>,
    /// Earnings per day, zero-filled
    pub data: Vec<f64>,
}

impl DailySeries {
    /// Number of days covered
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series covers no days
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all daily values
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Build the daily earnings series for a supplier
///
/// Covers the `days` consecutive UTC calendar days ending on `now`'s date.
/// Two phases: one pass over the orders summing matching line items into a
/// per-day map, then an in-order walk of the calendar filling gaps with 0, so
/// sparse data can never shorten or reorder the series.
pub fn daily_series(
    orders: &[Order],
    supplier: &SupplierId,
    days: u32,
    now: DateTime<Utc>,
) -> DailySeries {
    let mut by_day: HashMap<NaiveDate, f64> = HashMap::new();

    for order in orders {
        if order.deleted || order.status != OrderStatus::Delivered {
            continue;
        }
        let day_total: f64 = order
            .items_for_supplier(supplier)
            .map(|i| i.line_total())
            .sum();
        if day_total != 0.0 {
            *by_day.entry(day_key(order.placed_at)).or_insert(0.0) += day_total;
        }
    }

    let last = day_key(now);
    let mut labels = Vec::with_capacity(days as usize);
    let mut data = Vec::with_capacity(days as usize);

    for offset in (0..i64::from(days)).rev() {
        let date = last - Duration::days(offset);
        labels.push(day_label(date));
        data.push(by_day.get(&date).copied().unwrap_or(0.0));
    }

    DailySeries { labels, data }
}
