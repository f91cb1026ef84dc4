//! Patient aggregate
//!
//! The aggregate root owning demographics, an optional diagnosis, and an
//! ordered sequence of seizure events. The event sequence is kept sorted
//! non-decreasing by timestamp at all times; events without a timestamp
//! order before all timestamped events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::demographics::Demographics;
use crate::domain::diagnosis::Diagnosis;
use crate::domain::ids::PatientId;
use crate::domain::seizure::SeizureEvent;

/// Complete patient record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub demographics: Demographics,
    pub diagnosis: Option<Diagnosis>,
    seizure_events: Vec<SeizureEvent>,
}

impl Patient {
    /// Creates a patient from demographics, with no diagnosis or events
    pub fn new(demographics: Demographics) -> Self {
        Self {
            demographics,
            diagnosis: None,
            seizure_events: Vec::new(),
        }
    }

    /// The immutable patient identifier
    pub fn patient_id(&self) -> &PatientId {
        &self.demographics.patient_id
    }

    /// Attaches the diagnosis, rebinding it to this patient
    pub fn set_diagnosis(&mut self, mut diagnosis: Diagnosis) {
        diagnosis.patient_id = self.patient_id().clone();
        self.diagnosis = Some(diagnosis);
    }

    /// Appends a seizure event and re-establishes timestamp order
    ///
    /// The event is rebound to this patient. A stable sort keeps insertion
    /// order among events with equal timestamps.
    pub fn add_seizure_event(&mut self, mut event: SeizureEvent) {
        event.patient_id = self.patient_id().clone();
        self.seizure_events.push(event);
        self.seizure_events.sort_by_key(|e| e.sort_key());
    }

    /// The ordered event sequence
    pub fn seizure_events(&self) -> &[SeizureEvent] {
        &self.seizure_events
    }

    /// Timestamped events within `[start, end]` inclusive
    pub fn events_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Iterator<Item = &SeizureEvent> {
        self.seizure_events.iter().filter(move |e| {
            e.occurred_at
                .map(|at| at >= start && at <= end)
                .unwrap_or(false)
        })
    }

    /// Timestamped events in the trailing `days` window ending at `now`
    pub fn recent_events(&self, days: u32, now: DateTime<Utc>) -> Vec<&SeizureEvent> {
        let start = now - chrono::Duration::days(i64::from(days));
        self.events_between(start, now).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn patient() -> Patient {
        Patient::new(Demographics::new("Jane", "Doe").unwrap())
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_events_sorted_regardless_of_insertion_order() {
        let mut p = patient();
        let id = p.patient_id().clone();
        p.add_seizure_event(SeizureEvent::new(id.clone()).with_occurred_at(at(2026, 3, 10, 8)));
        p.add_seizure_event(SeizureEvent::new(id.clone()).with_occurred_at(at(2026, 1, 5, 14)));
        p.add_seizure_event(SeizureEvent::new(id.clone()).with_occurred_at(at(2026, 2, 20, 23)));

        let times: Vec<_> = p
            .seizure_events()
            .iter()
            .map(|e| e.occurred_at.unwrap())
            .collect();
        assert_eq!(
            times,
            vec![at(2026, 1, 5, 14), at(2026, 2, 20, 23), at(2026, 3, 10, 8)]
        );
    }

    #[test]
    fn test_undated_events_sort_first() {
        let mut p = patient();
        let id = p.patient_id().clone();
        p.add_seizure_event(SeizureEvent::new(id.clone()).with_occurred_at(at(2026, 1, 1, 0)));
        p.add_seizure_event(SeizureEvent::new(id.clone()));
        assert!(p.seizure_events()[0].occurred_at.is_none());
        assert!(p.seizure_events()[1].occurred_at.is_some());
    }

    #[test]
    fn test_events_rebound_to_patient() {
        let mut p = patient();
        let foreign = SeizureEvent::new(PatientId::generate());
        p.add_seizure_event(foreign);
        assert_eq!(&p.seizure_events()[0].patient_id, p.patient_id());
    }

    #[test]
    fn test_events_between_excludes_undated() {
        let mut p = patient();
        let id = p.patient_id().clone();
        p.add_seizure_event(SeizureEvent::new(id.clone()));
        p.add_seizure_event(SeizureEvent::new(id.clone()).with_occurred_at(at(2026, 5, 1, 12)));
        let hits: Vec<_> = p
            .events_between(at(2026, 4, 1, 0), at(2026, 6, 1, 0))
            .collect();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_recent_events_window() {
        let mut p = patient();
        let id = p.patient_id().clone();
        let now = at(2026, 8, 28, 12);
        p.add_seizure_event(
            SeizureEvent::new(id.clone()).with_occurred_at(now - chrono::Duration::days(5)),
        );
        p.add_seizure_event(
            SeizureEvent::new(id.clone()).with_occurred_at(now - chrono::Duration::days(40)),
        );
        assert_eq!(p.recent_events(30, now).len(), 1);
    }

    #[test]
    fn test_set_diagnosis_rebinds() {
        let mut p = patient();
        let dx = Diagnosis::new(PatientId::generate());
        p.set_diagnosis(dx);
        assert_eq!(
            &p.diagnosis.as_ref().unwrap().patient_id,
            p.patient_id()
        );
    }
}
