//! Analyze command implementation
//!
//! Prints the combined analytics summary for a patient record, optionally
//! with a per-day calendar for one year.

use chrono::{Datelike, Utc};
use clap::Args;

use crate::analytics;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the patient record JSON file
    #[arg(short, long)]
    pub patient: String,

    /// Include a seizure calendar for this year (defaults to the current
    /// year when the flag is given without a value)
    #[arg(long, value_name = "YEAR", num_args = 0..=1, default_missing_value = "0")]
    pub calendar: Option<i32>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, _config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(patient = %self.patient, "Starting analyze command");

        let patient = match super::read_patient(&self.patient) {
            Ok(p) => p,
            Err(e) => {
                println!("❌ Failed to read patient record: {e}");
                return Ok(3);
            }
        };

        let now = Utc::now();
        let summary = analytics::patient_summary(&patient, now)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);

        if let Some(year) = self.calendar {
            let year = if year == 0 { now.year() } else { year };
            let days = analytics::seizure_calendar(&patient, year)?;
            let active: Vec<_> = days.iter().filter(|d| d.seizure_count > 0).collect();
            println!();
            println!("Seizure calendar {year}: {} active days", active.len());
            for day in active {
                println!(
                    "   {}  count {}  duration {:.1} min  max severity {}",
                    day.date, day.seizure_count, day.total_duration, day.max_severity
                );
            }
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_args_creation() {
        let args = AnalyzeArgs {
            patient: "patient.json".to_string(),
            calendar: Some(2026),
        };
        let _ = format!("{args:?}");
    }
}
