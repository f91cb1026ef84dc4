//! Seizure pattern analysis
//!
//! Temporal and clinical distributions over the patient's timestamped
//! events. Pattern maps are ordered (`BTreeMap`) so serialized output is
//! deterministic.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{IctusError, Patient, Result, SeizureEvent};

/// Distributions and aggregates over timestamped seizure events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub total_events: usize,
    pub first_event: DateTime<Utc>,
    pub last_event: DateTime<Utc>,
    /// Counts keyed by seizure-type label; untyped events count as "Unknown"
    pub seizure_types: BTreeMap<String, usize>,
    /// Mean over events that recorded a duration
    pub average_duration: Option<f64>,
    /// Mean over events that recorded a severity
    pub average_severity: Option<f64>,
    /// Counts keyed by hour of day, 0-23
    pub hourly_pattern: BTreeMap<u32, usize>,
    /// Counts keyed by day of week, 0 = Monday through 6 = Sunday
    pub day_of_week_pattern: BTreeMap<u32, usize>,
    /// Counts keyed by month, 1-12
    pub monthly_pattern: BTreeMap<u32, usize>,
    /// Pearson correlation between stress level and severity over events
    /// recording both; absent with fewer than two pairs or zero variance
    pub stress_correlation: Option<f64>,
}

/// Analyzes seizure patterns over the patient's timestamped events
///
/// # Errors
///
/// Returns an analytics error when the patient has no timestamped events,
/// since no temporal distribution exists to report.
pub fn analyze_patterns(patient: &Patient) -> Result<PatternAnalysis> {
    let events: Vec<&SeizureEvent> = patient
        .seizure_events()
        .iter()
        .filter(|e| e.occurred_at.is_some())
        .collect();
    if events.is_empty() {
        return Err(IctusError::Analytics(
            "no timestamped seizure events to analyze".to_string(),
        ));
    }

    let timestamps: Vec<DateTime<Utc>> = events.iter().filter_map(|e| e.occurred_at).collect();

    let mut seizure_types = BTreeMap::new();
    let mut hourly_pattern = BTreeMap::new();
    let mut day_of_week_pattern = BTreeMap::new();
    let mut monthly_pattern = BTreeMap::new();
    for event in &events {
        let label = event
            .seizure_type
            .map(|t| t.label())
            .unwrap_or("Unknown")
            .to_string();
        *seizure_types.entry(label).or_insert(0) += 1;
        if let Some(at) = event.occurred_at {
            *hourly_pattern.entry(at.hour()).or_insert(0) += 1;
            *day_of_week_pattern
                .entry(at.weekday().num_days_from_monday())
                .or_insert(0) += 1;
            *monthly_pattern.entry(at.month()).or_insert(0) += 1;
        }
    }

    let durations: Vec<f64> = events.iter().filter_map(|e| e.duration_minutes).collect();
    let severities: Vec<f64> = events
        .iter()
        .filter_map(|e| e.severity.map(f64::from))
        .collect();

    let pairs: Vec<(f64, f64)> = events
        .iter()
        .filter_map(|e| {
            e.stress_level
                .zip(e.severity)
                .map(|(s, v)| (f64::from(s), f64::from(v)))
        })
        .collect();

    Ok(PatternAnalysis {
        total_events: events.len(),
        first_event: timestamps.iter().min().copied().unwrap_or_default(),
        last_event: timestamps.iter().max().copied().unwrap_or_default(),
        seizure_types,
        average_duration: mean(&durations),
        average_severity: mean(&severities),
        hourly_pattern,
        day_of_week_pattern,
        monthly_pattern,
        stress_correlation: pearson(&pairs),
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Pearson correlation coefficient; None with fewer than two pairs or
/// when either variable has zero variance
fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        None
    } else {
        Some(cov / denominator)
    }
}
