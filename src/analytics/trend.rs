//! Daily frequency trend
//!
//! Daily event counts over a trailing window with a 7-day rolling mean,
//! the series behind a frequency-trend chart.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{IctusError, Patient, Result};

const ROLLING_WINDOW: usize = 7;

/// One day in the trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: u32,
    /// Mean daily count over the trailing rolling window ending on this
    /// day; early points average over however many days exist so far
    pub rolling_mean: f64,
}

/// Daily counts for the trailing `window_days` window ending at `now`
///
/// The series covers `window_days + 1` consecutive dates (both endpoints
/// included), with zero counts for seizure-free days.
///
/// # Errors
///
/// Returns a validation error for a zero-length window.
pub fn frequency_trend(
    patient: &Patient,
    window_days: u32,
    now: DateTime<Utc>,
) -> Result<Vec<TrendPoint>> {
    if window_days == 0 {
        return Err(IctusError::Validation(
            "trend window must be at least one day".to_string(),
        ));
    }

    let end = now.date_naive();
    let start = end - Duration::days(i64::from(window_days));

    let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for event in patient.seizure_events() {
        let Some(at) = event.occurred_at else { continue };
        let date = at.date_naive();
        if date >= start && date <= end {
            *counts.entry(date).or_insert(0) += 1;
        }
    }

    let mut points = Vec::with_capacity(window_days as usize + 1);
    let mut date = start;
    while date <= end {
        let count = counts.get(&date).copied().unwrap_or(0);
        points.push(TrendPoint {
            date,
            count,
            rolling_mean: 0.0,
        });
        date += Duration::days(1);
    }

    for i in 0..points.len() {
        let from = i.saturating_sub(ROLLING_WINDOW - 1);
        let window = &points[from..=i];
        let sum: u32 = window.iter().map(|p| p.count).sum();
        points[i].rolling_mean = f64::from(sum) / window.len() as f64;
    }

    Ok(points)
}
