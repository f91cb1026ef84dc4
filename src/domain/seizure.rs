//! Seizure event records
//!
//! An individual seizure event. Every clinical detail is optional;
//! constructors validate ranges when a value is supplied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::enums::SeizureType;
use crate::domain::errors::IctusError;
use crate::domain::ids::{EventId, PatientId};
use crate::domain::validation;

/// One seizure event belonging to a patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeizureEvent {
    pub event_id: EventId,
    pub patient_id: PatientId,
    pub seizure_type: Option<SeizureType>,
    /// When the seizure occurred; events without a timestamp sort before
    /// all timestamped events in the patient's sequence
    pub occurred_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<f64>,
    pub severity: Option<u8>,
    pub stress_level: Option<u8>,
    pub triggers: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SeizureEvent {
    /// Creates an empty event for the given patient
    pub fn new(patient_id: PatientId) -> Self {
        Self {
            event_id: EventId::generate(),
            patient_id,
            seizure_type: None,
            occurred_at: None,
            duration_minutes: None,
            severity: None,
            stress_level: None,
            triggers: Vec::new(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_seizure_type(mut self, seizure_type: SeizureType) -> Self {
        self.seizure_type = Some(seizure_type);
        self
    }

    pub fn with_occurred_at(mut self, at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(at);
        self
    }

    /// Sets the duration in minutes; must be positive
    pub fn with_duration_minutes(mut self, minutes: f64) -> Result<Self, IctusError> {
        if !validation::is_valid_duration(minutes) {
            return Err(IctusError::Validation(format!(
                "duration must be positive, got {minutes}"
            )));
        }
        self.duration_minutes = Some(minutes);
        Ok(self)
    }

    /// Sets the severity on a 1-10 scale
    pub fn with_severity(mut self, severity: u8) -> Result<Self, IctusError> {
        if !validation::is_valid_scale(severity) {
            return Err(IctusError::Validation(format!(
                "severity must be between 1 and 10, got {severity}"
            )));
        }
        self.severity = Some(severity);
        Ok(self)
    }

    /// Sets the stress level on a 1-10 scale
    pub fn with_stress_level(mut self, stress: u8) -> Result<Self, IctusError> {
        if !validation::is_valid_scale(stress) {
            return Err(IctusError::Validation(format!(
                "stress level must be between 1 and 10, got {stress}"
            )));
        }
        self.stress_level = Some(stress);
        Ok(self)
    }

    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.triggers.push(trigger.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sort key for the patient's event sequence: missing timestamps are
    /// treated as the minimum possible time
    pub(crate) fn sort_key(&self) -> DateTime<Utc> {
        self.occurred_at.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
