//! Integrated-registry record generation
//!
//! Builds the registry health record (clinical data elements plus
//! metadata and governance blocks), the message envelope wrapping it for
//! exchange, the network registry entry, and the complete exchange bundle
//! combining all three with a compliance validation report.
//!
//! Null/omission policy for this schema: every optional scalar is an
//! explicit `null`; collections are always present, possibly empty.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::compliance;
use crate::domain::{Patient, Result};
use crate::terminology;
use crate::transform::DocumentSchema;

/// Schema version stamped on every registry record
pub const REGISTRY_SCHEMA_VERSION: &str = "IHIA-v2.1";

/// Generates integrated-registry documents
#[derive(Debug, Clone)]
pub struct RegistryGenerator {
    organization_id: String,
    system_id: String,
}

impl RegistryGenerator {
    /// Creates a generator carrying the sending organization's identity
    pub fn new(organization_id: impl Into<String>, system_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            system_id: system_id.into(),
        }
    }

    /// Registry health record for the patient
    ///
    /// The record id follows `IHIA-{organization}-{uuid}` so records from
    /// different organizations can never collide.
    pub fn health_record(&self, patient: &Patient, now: DateTime<Utc>) -> Value {
        let demographics = &patient.demographics;

        let mut conditions = Vec::new();
        if let Some(diagnosis) = &patient.diagnosis {
            conditions.push(json!({
                "condition_code": terminology::ICD10_EPILEPSY,
                "condition_name": "Epilepsy",
                "condition_type": diagnosis.epilepsy_type.map(|t| t.label()),
                "severity": diagnosis.severity_level.map(|s| s.label()),
                "onset_date": diagnosis.diagnosis_date.map(|d| d.to_string()),
                "clinical_status": "active",
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
                    "clinical_details": {
                        "seizure_type": event.seizure_type.map(|t| t.label()),
                        "duration_minutes": event.duration_minutes,
                        "severity_score": event.severity,
                        "stress_level": event.stress_level,
                        "triggers": event.triggers,
                    },
                })
            })
            .collect();

        json!({
            "record_id": format!("IHIA-{}-{}", self.organization_id, Uuid::new_v4()),
            "patient_identifier": patient.patient_id().as_str(),
            "source_system": self.system_id,
            "record_type": "comprehensive",
            "clinical_domain": "neurology",
            "data_elements": {
                "demographics": {
                    "patient_name": demographics.full_name(),
                    "date_of_birth": demographics.date_of_birth.map(|d| d.to_string()),
                    "gender": demographics.gender.map(|g| g.label()),
                    "identifiers": {
                        "medical_record_number": demographics.patient_id.as_str(),
                        "insurance_id": demographics.insurance_id,
                    },
                },
                "conditions": conditions,
                "encounters": encounters,
                "treatments": [],
                "outcomes": [],
            },
            "metadata": {
                "schema_version": REGISTRY_SCHEMA_VERSION,
                "data_format": "JSON",
                "encoding": "UTF-8",
                "source_system_version": env!("CARGO_PKG_VERSION"),
                "interoperability_standards": ["FHIR R4", "HL7 v2.8", "openEHR", "IHE XDS"],
            },
            "governance": {
                "data_steward": "Epilepsy Management System",
                "privacy_classification": "Protected Health Information",
                "retention_period": "10 years",
                "access_controls": ["authorized_healthcare_providers", "patient_portal"],
                "audit_trail": [{
                    "action": "create",
                    "timestamp": now.to_rfc3339(),
                    "user": "system",
                    "details": "Initial record creation",
                }],
                "consent_status": "active",
                "data_quality_score": 0.95,
            },
            "created_timestamp": now.to_rfc3339(),
            "last_updated": now.to_rfc3339(),
        })
    }

    /// Message envelope wrapping a health record for secure exchange
    pub fn message_envelope(&self, health_record: &Value, now: DateTime<Utc>) -> Value {
        json!({
            "message_header": {
                "message_id": Uuid::new_v4().to_string(),
                "timestamp": now.to_rfc3339(),
                "sender": {
                    "organization_id": self.organization_id,
                    "system_id": self.system_id,
                },
                "message_type": "health_record_exchange",
                "priority": "normal",
                "security_classification": "protected",
            },
            "routing_information": {
                "destination_systems": ["HIE", "EHR", "PHR"],
                "delivery_method": "secure_transport",
                "acknowledgment_required": true,
            },
            "payload": {
                "content_type": "application/json",
                "schema_reference": format!("IHIA-HealthRecord-{REGISTRY_SCHEMA_VERSION}"),
                "data": health_record,
            },
            "security": {
                "encryption_standard": "AES-256",
                "digital_signature": "present",
                "authentication_method": "PKI",
            },
        })
    }

    /// Network registry entry announcing where the record can be retrieved
    pub fn registry_entry(&self, health_record: &Value, now: DateTime<Utc>) -> Value {
        let record_id = health_record
            .pointer("/record_id")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let element_names: Vec<&str> = health_record
            .pointer("/data_elements")
            .and_then(Value::as_object)
            .map(|elements| elements.keys().map(String::as_str).collect())
            .unwrap_or_default();

        json!({
            "registry_id": format!("REG-{}", Uuid::new_v4()),
            "record_metadata": {
                "record_id": record_id,
                "patient_identifier": health_record.pointer("/patient_identifier"),
                "source_system": self.system_id,
                "clinical_domain": "neurology",
                "record_type": "comprehensive",
            },
            "availability": {
                "status": "available",
                "last_updated": health_record.pointer("/last_updated"),
                "access_method": "API",
                "query_endpoint": format!("https://api.ihia.gov/records/{record_id}"),
            },
            "content_summary": {
                "data_elements": element_names,
            },
            "governance": {
                "privacy_level": health_record.pointer("/governance/privacy_classification"),
                "access_controls": health_record.pointer("/governance/access_controls"),
                "retention_policy": health_record.pointer("/governance/retention_period"),
            },
            "registered_timestamp": now.to_rfc3339(),
        })
    }

    /// Complete exchange bundle: record, envelope, registry entry, and the
    /// compliance validation report for the record
    ///
    /// # Errors
    ///
    /// Returns an error if compliance validation cannot locate the record
    /// identifier, or if the report cannot be serialized.
    pub fn exchange_bundle(&self, patient: &Patient, now: DateTime<Utc>) -> Result<Value> {
        let health_record = self.health_record(patient, now);
        let envelope = self.message_envelope(&health_record, now);
        let entry = self.registry_entry(&health_record, now);
        let report = compliance::validate_document(DocumentSchema::Registry, &health_record, now)?;

        Ok(json!({
            "bundle_type": "IHIA_Complete_Exchange",
            "bundle_id": Uuid::new_v4().to_string(),
            "created_timestamp": now.to_rfc3339(),
            "message_envelope": envelope,
            "health_record": health_record,
            "registry_entry": entry,
            "validation_results": serde_json::to_value(&report)?,
            "metadata": {
                "framework_version": REGISTRY_SCHEMA_VERSION,
                "generator_version": env!("CARGO_PKG_VERSION"),
                "export_timestamp": now.to_rfc3339(),
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::{EpilepsyType, SeverityLevel};
    use crate::domain::{Demographics, Diagnosis, Patient, SeizureEvent};
    use chrono::TimeZone;

    fn generator() -> RegistryGenerator {
        RegistryGenerator::new("ICTUS-ORG", "ICTUS-SYS-001")
    }

    fn patient() -> Patient {
        Patient::new(Demographics::new("Jane", "Doe").unwrap())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_record_id_carries_organization() {
        let record = generator().health_record(&patient(), now());
        let record_id = record["record_id"].as_str().unwrap();
        assert!(record_id.starts_with("IHIA-ICTUS-ORG-"));
        assert_eq!(record["source_system"], "ICTUS-SYS-001");
    }

    #[test]
    fn test_empty_patient_has_empty_collections_and_nulls() {
        let record = generator().health_record(&patient(), now());
        let elements = &record["data_elements"];
        assert_eq!(elements["conditions"].as_array().unwrap().len(), 0);
        assert_eq!(elements["encounters"].as_array().unwrap().len(), 0);
        assert!(elements["demographics"]["date_of_birth"].is_null());
        assert!(elements["demographics"]["gender"].is_null());
    }

    #[test]
    fn test_condition_uses_icd10_code() {
        let mut p = patient();
        p.set_diagnosis(
            Diagnosis::new(p.patient_id().clone())
                .with_epilepsy_type(EpilepsyType::Generalized)
                .with_severity(SeverityLevel::Mild),
        );
        let record = generator().health_record(&p, now());
        let condition = &record["data_elements"]["conditions"][0];
        assert_eq!(condition["condition_code"], "ICD-10:G40.9");
        assert_eq!(condition["condition_type"], "Generalized");
        assert_eq!(condition["severity"], "Mild");
    }

    #[test]
    fn test_encounters_mirror_event_sequence() {
        let mut p = patient();
        for day in [5, 2, 9] {
            p.add_seizure_event(
                SeizureEvent::new(p.patient_id().clone())
                    .with_occurred_at(Utc.with_ymd_and_hms(2026, 7, day, 6, 0, 0).unwrap()),
            );
        }
        let record = generator().health_record(&p, now());
        let encounters = record["data_elements"]["encounters"].as_array().unwrap();
        assert_eq!(encounters.len(), 3);
        let dates: Vec<&str> = encounters
            .iter()
            .map(|e| e["encounter_date"].as_str().unwrap())
            .collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_registry_entry_points_at_record() {
        let g = generator();
        let record = g.health_record(&patient(), now());
        let entry = g.registry_entry(&record, now());
        assert_eq!(entry["record_metadata"]["record_id"], record["record_id"]);
        let endpoint = entry["availability"]["query_endpoint"].as_str().unwrap();
        assert!(endpoint.ends_with(record["record_id"].as_str().unwrap()));
        let elements = entry["content_summary"]["data_elements"].as_array().unwrap();
        assert_eq!(elements.len(), 5);
    }

    #[test]
    fn test_envelope_wraps_record_payload() {
        let g = generator();
        let record = g.health_record(&patient(), now());
        let envelope = g.message_envelope(&record, now());
        assert_eq!(envelope["payload"]["data"], record);
        assert_eq!(
            envelope["message_header"]["sender"]["organization_id"],
            "ICTUS-ORG"
        );
        assert_eq!(
            envelope["payload"]["schema_reference"],
            "IHIA-HealthRecord-IHIA-v2.1"
        );
    }

    #[test]
    fn test_exchange_bundle_assembles_all_parts() {
        let bundle = generator().exchange_bundle(&patient(), now()).unwrap();
        assert_eq!(bundle["bundle_type"], "IHIA_Complete_Exchange");
        assert!(bundle["health_record"].is_object());
        assert!(bundle["message_envelope"].is_object());
        assert!(bundle["registry_entry"].is_object());
        assert!(bundle["validation_results"]["compliance_score"].is_number());
    }
}
