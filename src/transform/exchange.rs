//! Exchange-network record generation
//!
//! Builds the flattened patient record shared over a health-information
//! exchange network, plus the acknowledgment documents a submission or
//! query produces. No transport is performed; callers hand the documents
//! to whatever delivery mechanism they use.
//!
//! Null/omission policy for this schema: optional scalars are explicit
//! `null`; the medications and lab-results collections are always present
//! and empty until those sources are wired in.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::info;

use crate::domain::Patient;

/// Generates exchange-network patient records
#[derive(Debug, Clone)]
pub struct ExchangeGenerator {
    facility_id: String,
}

impl ExchangeGenerator {
    /// Creates a generator for the given sending facility
    pub fn new(facility_id: impl Into<String>) -> Self {
        Self {
            facility_id: facility_id.into(),
        }
    }

    /// Flattened patient record for network exchange
    pub fn patient_record(&self, patient: &Patient, now: DateTime<Utc>) -> Value {
        let demographics = &patient.demographics;

        let mut conditions = Vec::new();
        if let Some(diagnosis) = &patient.diagnosis {
            conditions.push(json!({
                "condition_id": diagnosis.diagnosis_id.as_str(),
                "condition_code": "G40.9",
                "condition_name": "Epilepsy",
                "condition_type": diagnosis.epilepsy_type.map(|t| t.label()),
                "severity": diagnosis.severity_level.map(|s| s.label()),
                "onset_age": diagnosis.age_at_onset,
                "diagnosis_date": diagnosis.diagnosis_date.map(|d| d.to_string()),
                "status": "active",
                "clinician": diagnosis.diagnosing_physician,
            }));
        }

        let encounters: Vec<Value> = patient
            .seizure_events()
            .iter()
            .map(|event| {
                json!({
                    "encounter_id": event.event_id.as_str(),
                    "encounter_type": "seizure_event",
                    "encounter_date": event.occurred_at.map(|at| at.to_rfc3339()),
                    "seizure_type": event.seizure_type.map(|t| t.label()),
                    "duration_minutes": event.duration_minutes,
                    "severity": event.severity,
                    "triggers": event.triggers,
                    "notes": event.notes,
                })
            })
            .collect();

        json!({
            "patient_id": patient.patient_id().as_str(),
            "facility_id": self.facility_id,
            "medical_record_number": patient.patient_id().as_str(),
            "demographics": {
                "first_name": demographics.first_name,
                "last_name": demographics.last_name,
                "date_of_birth": demographics.date_of_birth.map(|d| d.to_string()),
                "gender": demographics.gender.map(|g| g.label()),
                "race": demographics.race,
                "ethnicity": demographics.ethnicity,
                "address": {
                    "street": demographics.address,
                    "city": demographics.city,
                    "state": demographics.state,
                    "zip_code": demographics.zip_code,
                },
                "contact": {
                    "phone": demographics.phone_number,
                    "email": demographics.email,
                },
                "emergency_contact": {
                    "name": demographics.emergency_contact,
                    "phone": demographics.emergency_phone,
                },
            },
            "conditions": conditions,
            "encounters": encounters,
            "medications": [],
            "lab_results": [],
            "last_updated": now.to_rfc3339(),
        })
    }

    /// Acknowledgment document for a record submission
    ///
    /// Counts one data point per demographics block plus one per entry in
    /// each clinical collection of the submitted record.
    pub fn submission_receipt(&self, patient: &Patient, now: DateTime<Utc>) -> Value {
        let record = self.patient_record(patient, now);
        let count = |key: &str| {
            record[key]
                .as_array()
                .map(Vec::len)
                .unwrap_or_default()
        };
        info!(
            patient_id = %patient.patient_id(),
            facility_id = %self.facility_id,
            encounters = count("encounters"),
            "prepared exchange submission"
        );

        json!({
            "status": "success",
            "message": "Patient data accepted for exchange",
            "exchange_patient_id": format!("HIE-{}", patient.patient_id()),
            "timestamp": now.to_rfc3339(),
            "data_points_submitted": {
                "demographics": 1,
                "conditions": count("conditions"),
                "encounters": count("encounters"),
                "medications": count("medications"),
                "lab_results": count("lab_results"),
            },
        })
    }

    /// Acknowledgment document for a record availability query
    pub fn query_receipt(&self, patient_id: &str, now: DateTime<Utc>) -> Value {
        info!(patient_id, facility_id = %self.facility_id, "prepared exchange query");
        json!({
            "status": "success",
            "patient_id": patient_id,
            "queried_by": self.facility_id,
            "consent_status": "active",
            "query_timestamp": now.to_rfc3339(),
        })
    }
}
