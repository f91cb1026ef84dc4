//! Calendar aggregation
//!
//! Per-day seizure aggregates for one calendar year, with an entry for
//! every day of the year whether or not a seizure occurred.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{IctusError, Patient, Result};

/// Aggregates for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub seizure_count: u32,
    /// Sum of recorded durations in minutes; unrecorded durations add zero
    pub total_duration: f64,
    /// Highest recorded severity, 0 when none recorded
    pub max_severity: u8,
}

/// Per-day seizure calendar for the given year
///
/// Returns one entry per day, January 1 through December 31, in order:
/// 365 entries, or 366 in a leap year.
///
/// # Errors
///
/// Returns a validation error for a year chrono cannot represent.
pub fn seizure_calendar(patient: &Patient, year: i32) -> Result<Vec<CalendarDay>> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| IctusError::Validation(format!("invalid calendar year: {year}")))?;

    let mut by_day: BTreeMap<NaiveDate, (u32, f64, u8)> = BTreeMap::new();
    for event in patient.seizure_events() {
        let Some(at) = event.occurred_at else { continue };
        if at.year() != year {
            continue;
        }
        let entry = by_day.entry(at.date_naive()).or_insert((0, 0.0, 0));
        entry.0 += 1;
        if let Some(minutes) = event.duration_minutes {
            entry.1 += minutes;
        }
        if let Some(severity) = event.severity {
            entry.2 = entry.2.max(severity);
        }
    }

    let mut days = Vec::with_capacity(366);
    let mut date = start;
    while date.year() == year {
        let (seizure_count, total_duration, max_severity) =
            by_day.get(&date).copied().unwrap_or((0, 0.0, 0));
        days.push(CalendarDay {
            date,
            seizure_count,
            total_duration,
            max_severity,
        });
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Demographics, SeizureEvent};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn patient() -> Patient {
        Patient::new(Demographics::new("Jane", "Doe").unwrap())
    }

    #[test]
    fn test_year_length() {
        let p = patient();
        assert_eq!(seizure_calendar(&p, 2026).unwrap().len(), 365);
        assert_eq!(seizure_calendar(&p, 2028).unwrap().len(), 366);
    }

    #[test]
    fn test_daily_aggregates() {
        let mut p = patient();
        let id = p.patient_id().clone();
        p.add_seizure_event(
            SeizureEvent::new(id.clone())
                .with_occurred_at(at(2026, 3, 15, 8))
                .with_duration_minutes(2.0)
                .unwrap()
                .with_severity(4)
                .unwrap(),
        );
        p.add_seizure_event(
            SeizureEvent::new(id.clone())
                .with_occurred_at(at(2026, 3, 15, 20))
                .with_duration_minutes(1.5)
                .unwrap()
                .with_severity(7)
                .unwrap(),
        );
        // different year must not leak in
        p.add_seizure_event(SeizureEvent::new(id.clone()).with_occurred_at(at(2025, 3, 15, 8)));

        let days = seizure_calendar(&p, 2026).unwrap();
        let day = days
            .iter()
            .find(|d| d.date == NaiveDate::from_ymd_opt(2026, 3, 15).unwrap())
            .unwrap();
        assert_eq!(day.seizure_count, 2);
        assert_eq!(day.total_duration, 3.5);
        assert_eq!(day.max_severity, 7);

        let total: u32 = days.iter().map(|d| d.seizure_count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_quiet_days_are_zeroed() {
        let days = seizure_calendar(&patient(), 2026).unwrap();
        assert!(days.iter().all(|d| d.seizure_count == 0));
        assert!(days.iter().all(|d| d.total_duration == 0.0));
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(
            days.last().unwrap().date,
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_unmeasured_events_count_but_add_nothing() {
        let mut p = patient();
        p.add_seizure_event(
            SeizureEvent::new(p.patient_id().clone()).with_occurred_at(at(2026, 5, 1, 12)),
        );
        let days = seizure_calendar(&p, 2026).unwrap();
        let day = days
            .iter()
            .find(|d| d.date == NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
            .unwrap();
        assert_eq!(day.seizure_count, 1);
        assert_eq!(day.total_duration, 0.0);
        assert_eq!(day.max_severity, 0);
    }
}
