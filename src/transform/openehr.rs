//! openEHR composition generation
//!
//! Builds a persistent health-summary composition with fixed archetype
//! node ids: an ADMIN_ENTRY for person data, an EVALUATION for the
//! problem/diagnosis when present, and one OBSERVATION per seizure event.
//!
//! Null/omission policy for this schema: fixed slots in the archetype
//! structure (birth date value, event time value) are explicit `null`;
//! optional magnitude elements (duration, severity) are omitted entirely
//! when unmeasured.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::{Diagnosis, Patient, SeizureEvent};
use crate::terminology;

/// Generates openEHR patient-summary compositions
#[derive(Debug, Clone)]
pub struct OpenEhrGenerator {
    language: String,
    territory: String,
}

impl OpenEhrGenerator {
    /// Creates a generator with the given composition language and territory
    pub fn new(language: impl Into<String>, territory: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            territory: territory.into(),
        }
    }

    /// Full patient-summary composition
    ///
    /// Content order is person data, then the diagnosis evaluation when a
    /// diagnosis exists, then one observation per seizure event in
    /// sequence order, so the content length equals
    /// `1 + diagnosis + events`.
    pub fn composition(&self, patient: &Patient, now: DateTime<Utc>) -> Value {
        let mut content = vec![self.person_data_entry(patient)];
        if let Some(diagnosis) = &patient.diagnosis {
            content.push(self.problem_diagnosis_entry(diagnosis));
        }
        for event in patient.seizure_events() {
            content.push(self.seizure_observation_entry(event));
        }

        let category = terminology::openehr_persistent_category();
        let setting = terminology::openehr_setting();
        json!({
            "uid": format!("{}::ictus::1", Uuid::new_v4()),
            "archetype_node_id": "openEHR-EHR-COMPOSITION.health_summary.v1",
            "name": { "value": "Epilepsy Patient Summary" },
            "language": {
                "terminology_id": { "value": "ISO_639-1" },
                "code_string": self.language,
            },
            "territory": {
                "terminology_id": { "value": "ISO_3166-1" },
                "code_string": self.territory,
            },
            "category": {
                "value": category.display,
                "defining_code": {
                    "terminology_id": { "value": category.system },
                    "code_string": category.code,
                },
            },
            "composer": { "name": "Epilepsy Management System" },
            "context": {
                "start_time": { "value": now.to_rfc3339() },
                "setting": {
                    "value": setting.display,
                    "defining_code": {
                        "terminology_id": { "value": setting.system },
                        "code_string": setting.code,
                    },
                },
            },
            "content": content,
        })
    }

    fn person_data_entry(&self, patient: &Patient) -> Value {
        let demographics = &patient.demographics;
        json!({
            "archetype_node_id": "openEHR-EHR-ADMIN_ENTRY.person_data.v0",
            "name": { "value": "Person Data" },
            "data": {
                "items": [
                    {
                        "name": { "value": "Name" },
                        "value": { "value": demographics.full_name() },
                    },
                    {
                        "name": { "value": "Date of Birth" },
                        "value": {
                            "value": demographics.date_of_birth.map(|d| d.to_string()),
                        },
                    },
                    {
                        "name": { "value": "Gender" },
                        "value": {
                            "value": demographics
                                .gender
                                .map(|g| g.label())
                                .unwrap_or("Unknown"),
                        },
                    },
                ],
            },
        })
    }

    fn problem_diagnosis_entry(&self, diagnosis: &Diagnosis) -> Value {
        let description = match (diagnosis.epilepsy_type, diagnosis.severity_level) {
            (Some(t), Some(s)) => format!("{} epilepsy, {} severity", t.label(), s.label()),
            (Some(t), None) => format!("{} epilepsy", t.label()),
            _ => "Epilepsy".to_string(),
        };
        let code = terminology::snomed_epilepsy_type(diagnosis.epilepsy_type);
        json!({
            "archetype_node_id": "openEHR-EHR-EVALUATION.problem_diagnosis.v1",
            "name": { "value": "Problem/Diagnosis" },
            "data": {
                "items": [
                    {
                        "name": { "value": "Problem/Diagnosis name" },
                        "value": {
                            "value": "Epilepsy",
                            "defining_code": {
                                "terminology_id": { "value": "SNOMED-CT" },
                                "code_string": code.code,
                            },
                        },
                    },
                    {
                        "name": { "value": "Clinical description" },
                        "value": { "value": description },
                    },
                    {
                        "name": { "value": "Date of onset" },
                        "value": {
                            "value": diagnosis.diagnosis_date.map(|d| d.to_string()),
                        },
                    },
                    {
                        "name": { "value": "Episodicity" },
                        "value": { "value": "Ongoing episode" },
                    },
                ],
            },
        })
    }

    fn seizure_observation_entry(&self, event: &SeizureEvent) -> Value {
        let mut items = vec![json!({
            "name": { "value": "Seizure type" },
            "value": {
                "value": event.seizure_type.map(|t| t.label()).unwrap_or("Unknown"),
            },
        })];
        if let Some(minutes) = event.duration_minutes {
            items.push(json!({
                "name": { "value": "Duration" },
                "value": { "magnitude": minutes, "units": "min" },
            }));
        }
        if let Some(severity) = event.severity {
            items.push(json!({
                "name": { "value": "Severity" },
                "value": { "magnitude": severity, "units": "1" },
            }));
        }

        json!({
            "archetype_node_id": "openEHR-EHR-OBSERVATION.seizure.v0",
            "name": { "value": "Seizure Event" },
            "data": {
                "origin": {
                    "value": event.occurred_at.map(|at| at.to_rfc3339()),
                },
                "events": [{
                    "name": { "value": "Any event" },
                    "time": {
                        "value": event.occurred_at.map(|at| at.to_rfc3339()),
                    },
                    "data": { "items": items },
                }],
            },
        })
    }
}
