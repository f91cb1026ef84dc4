//! Windowed seizure frequency

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{IctusError, Patient, Result};

/// Seizure frequency over a trailing analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub total_seizures: usize,
    pub frequency_per_day: f64,
    pub frequency_per_week: f64,
    /// Normalized to a 30-day month
    pub frequency_per_month: f64,
    pub analysis_period_days: u32,
}

/// Seizure frequency over the trailing `days` window ending at `now`
///
/// Weekly and monthly rates are scaled from the daily rate (7 and 30
/// days), so `frequency_per_week == 7.0 * frequency_per_day` always holds.
///
/// # Errors
///
/// Returns a validation error for a zero-length window.
pub fn seizure_frequency(patient: &Patient, days: u32, now: DateTime<Utc>) -> Result<FrequencyReport> {
    if days == 0 {
        return Err(IctusError::Validation(
            "analysis window must be at least one day".to_string(),
        ));
    }

    let total_seizures = patient.recent_events(days, now).len();
    let frequency_per_day = total_seizures as f64 / f64::from(days);

    Ok(FrequencyReport {
        total_seizures,
        frequency_per_day,
        frequency_per_week: frequency_per_day * 7.0,
        frequency_per_month: frequency_per_day * 30.0,
        analysis_period_days: days,
    })
}
