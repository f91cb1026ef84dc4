//! FHIR R4 resource generation
//!
//! Maps domain entities to FHIR R4 resources: Patient, Condition,
//! Observation, MedicationRequest, CarePlan, and a collection Bundle for
//! the full record.
//!
//! Null/omission policy for this schema: nullable-but-structurally-required
//! scalars (`birthDate`, `recordedDate`, `effectiveDateTime`) are emitted
//! as explicit `null`; optional composite blocks (`recorder`, `onsetAge`,
//! `note`, observation components, address and telecom entries) are
//! omitted when the source data is absent.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use crate::domain::{Diagnosis, Patient, Prescription, SeizureEvent, TreatmentPlan};
use crate::domain::enums::MedicationStatus;
use crate::terminology;

/// Generates FHIR R4 resources for a patient record
#[derive(Debug, Clone)]
pub struct FhirGenerator {
    base_url: String,
    version: String,
}

impl FhirGenerator {
    /// Creates a generator rooted at the given FHIR base URL
    pub fn new(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
        }
    }

    /// The configured FHIR version marker
    pub fn version(&self) -> &str {
        &self.version
    }

    fn meta(&self, last_updated: DateTime<Utc>, profile: &str) -> Value {
        json!({
            "versionId": "1",
            "lastUpdated": last_updated.to_rfc3339(),
            "profile": [format!("{}/StructureDefinition/{profile}", self.base_url)],
        })
    }

    fn subject(&self, patient: &Patient) -> Value {
        json!({
            "reference": format!("Patient/{}", patient.patient_id()),
            "display": patient.demographics.full_name(),
        })
    }

    /// FHIR Patient resource
    pub fn patient_resource(&self, patient: &Patient) -> Value {
        let demographics = &patient.demographics;

        let mut identifiers = vec![json!({
            "use": "usual",
            "type": { "coding": [terminology::hl7_medical_record_number().to_coding()] },
            "system": format!("{}/patient-id", self.base_url),
            "value": demographics.patient_id.as_str(),
        })];
        if let Some(insurance_id) = &demographics.insurance_id {
            identifiers.push(json!({
                "use": "secondary",
                "type": { "coding": [terminology::hl7_member_number().to_coding()] },
                "system": format!("{}/insurance-id", self.base_url),
                "value": insurance_id,
            }));
        }

        let mut telecoms = Vec::new();
        if let Some(phone) = &demographics.phone_number {
            telecoms.push(json!({ "system": "phone", "value": phone, "use": "home" }));
        }
        if let Some(email) = &demographics.email {
            telecoms.push(json!({ "system": "email", "value": email, "use": "home" }));
        }

        let mut addresses = Vec::new();
        if let Some(street) = &demographics.address {
            addresses.push(json!({
                "use": "home",
                "type": "both",
                "line": [street],
                "city": demographics.city,
                "state": demographics.state,
                "postalCode": demographics.zip_code,
                "country": "US",
            }));
        }

        let mut contacts = Vec::new();
        if let Some(name) = &demographics.emergency_contact {
            let telecom: Vec<Value> = demographics
                .emergency_phone
                .iter()
                .map(|phone| json!({ "system": "phone", "value": phone, "use": "home" }))
                .collect();
            contacts.push(json!({
                "relationship": [{ "coding": [terminology::hl7_emergency_contact().to_coding()] }],
                "name": { "text": name },
                "telecom": telecom,
            }));
        }

        json!({
            "resourceType": "Patient",
            "id": demographics.patient_id.as_str(),
            "meta": self.meta(demographics.updated_at, "EpilepsyPatient"),
            "identifier": identifiers,
            "active": true,
            "name": [{
                "use": "official",
                "family": demographics.last_name,
                "given": [demographics.first_name],
            }],
            "telecom": telecoms,
            "gender": terminology::fhir_gender(demographics.gender),
            "birthDate": demographics.date_of_birth.map(|d| d.to_string()),
            "address": addresses,
            "contact": contacts,
        })
    }

    /// FHIR Condition resource for the epilepsy diagnosis
    pub fn condition_resource(&self, patient: &Patient, diagnosis: &Diagnosis) -> Value {
        let type_label = diagnosis
            .epilepsy_type
            .map(|t| t.label())
            .unwrap_or("Unknown");

        let mut condition = json!({
            "resourceType": "Condition",
            "id": diagnosis.diagnosis_id.as_str(),
            "meta": self.meta(diagnosis.updated_at, "EpilepsyCondition"),
            "clinicalStatus": {
                "coding": [{
                    "system": terminology::CONDITION_CLINICAL,
                    "code": "active",
                    "display": "Active",
                }],
            },
            "verificationStatus": {
                "coding": [{
                    "system": terminology::CONDITION_VER_STATUS,
                    "code": "confirmed",
                    "display": "Confirmed",
                }],
            },
            "category": [{
                "coding": [{
                    "system": terminology::CONDITION_CATEGORY,
                    "code": "encounter-diagnosis",
                    "display": "Encounter Diagnosis",
                }],
            }],
            "severity": {
                "coding": [terminology::snomed_severity(diagnosis.severity_level).to_coding()],
            },
            "code": {
                "coding": [terminology::snomed_epilepsy_type(diagnosis.epilepsy_type).to_coding()],
                "text": format!("{type_label} Epilepsy"),
            },
            "subject": self.subject(patient),
            "recordedDate": diagnosis.diagnosis_date.map(|d| d.to_string()),
        });

        let obj = as_object_mut(&mut condition);
        if let Some(age) = diagnosis.age_at_onset {
            obj.insert(
                "onsetAge".to_string(),
                json!({
                    "value": age,
                    "unit": "years",
                    "system": terminology::UCUM,
                    "code": "a",
                }),
            );
        }
        if let Some(physician) = &diagnosis.diagnosing_physician {
            obj.insert("recorder".to_string(), json!({ "display": physician }));
        }

        let notes: Vec<Value> = super::note_texts(&[
            ("Etiology", diagnosis.etiology.as_deref()),
            ("EEG Findings", diagnosis.eeg_findings.as_deref()),
            ("MRI Findings", diagnosis.mri_findings.as_deref()),
        ])
        .into_iter()
        .map(|text| json!({ "text": text }))
        .collect();
        if !notes.is_empty() {
            obj.insert("note".to_string(), Value::Array(notes));
        }

        condition
    }

    /// FHIR Observation resource for one seizure event
    pub fn observation_resource(&self, patient: &Patient, event: &SeizureEvent) -> Value {
        let type_label = event.seizure_type.map(|t| t.label()).unwrap_or("Unknown");

        let mut observation = json!({
            "resourceType": "Observation",
            "id": event.event_id.as_str(),
            "meta": self.meta(event.created_at, "SeizureObservation"),
            "status": "final",
            "category": [{
                "coding": [{
                    "system": terminology::OBSERVATION_CATEGORY,
                    "code": "survey",
                    "display": "Survey",
                }],
            }],
            "code": {
                "coding": [terminology::snomed_seizure().to_coding()],
                "text": "Seizure Event",
            },
            "subject": self.subject(patient),
            "effectiveDateTime": event.occurred_at.map(|at| at.to_rfc3339()),
            "valueCodeableConcept": {
                "coding": [terminology::snomed_seizure_type(event.seizure_type).to_coding()],
                "text": type_label,
            },
        });

        let mut components = Vec::new();
        if let Some(minutes) = event.duration_minutes {
            components.push(json!({
                "code": { "coding": [terminology::loinc_duration().to_coding()] },
                "valueQuantity": {
                    "value": minutes,
                    "unit": "minutes",
                    "system": terminology::UCUM,
                    "code": "min",
                },
            }));
        }
        if let Some(severity) = event.severity {
            components.push(json!({
                "code": { "coding": [terminology::loinc_severity().to_coding()] },
                "valueQuantity": {
                    "value": severity,
                    "unit": "score",
                    "system": terminology::UCUM,
                    "code": "1",
                },
            }));
        }
        if let Some(stress) = event.stress_level {
            components.push(json!({
                "code": { "coding": [terminology::loinc_stress_level().to_coding()] },
                "valueQuantity": {
                    "value": stress,
                    "unit": "score",
                    "system": terminology::UCUM,
                    "code": "1",
                },
            }));
        }

        let obj = as_object_mut(&mut observation);
        if !components.is_empty() {
            obj.insert("component".to_string(), Value::Array(components));
        }

        let triggers = if event.triggers.is_empty() {
            None
        } else {
            Some(event.triggers.join(", "))
        };
        let notes: Vec<Value> = super::note_texts(&[
            ("Triggers", triggers.as_deref()),
            ("Notes", event.notes.as_deref()),
        ])
        .into_iter()
        .map(|text| json!({ "text": text }))
        .collect();
        if !notes.is_empty() {
            obj.insert("note".to_string(), Value::Array(notes));
        }

        observation
    }

    /// FHIR MedicationRequest resource for a prescription
    pub fn medication_request_resource(
        &self,
        patient: &Patient,
        prescription: &Prescription,
    ) -> Value {
        let status = match prescription.status {
            MedicationStatus::Active => "active",
            MedicationStatus::TemporaryHold | MedicationStatus::DoseAdjustment => "on-hold",
            MedicationStatus::Discontinued => "stopped",
        };

        let mut request = json!({
            "resourceType": "MedicationRequest",
            "id": prescription.prescription_id.as_str(),
            "meta": self.meta(prescription.updated_at, "EpilepsyMedicationRequest"),
            "status": status,
            "intent": "order",
            "medicationCodeableConcept": { "text": prescription.medication },
            "subject": self.subject(patient),
            "authoredOn": prescription.prescription_date.to_string(),
            "dispenseRequest": {
                "numberOfRepeatsAllowed": prescription.refills_remaining,
            },
        });

        let obj = as_object_mut(&mut request);
        if let Some(physician) = &prescription.prescribing_physician {
            obj.insert("requester".to_string(), json!({ "display": physician }));
        }
        if prescription.dosage.is_some() || prescription.frequency.is_some() {
            let text = [
                prescription.dosage.as_deref(),
                prescription.frequency.as_deref(),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
            obj.insert(
                "dosageInstruction".to_string(),
                json!([{
                    "text": text,
                    "route": {
                        "coding": [{
                            "system": terminology::SNOMED_CT,
                            "code": "26643006",
                            "display": "Oral route",
                        }],
                    },
                }]),
            );
        }
        if let Some(indication) = &prescription.indication {
            obj.insert("reasonCode".to_string(), json!([{ "text": indication }]));
        }
        if let Some(instructions) = &prescription.instructions {
            obj.insert("note".to_string(), json!([{ "text": instructions }]));
        }

        request
    }

    /// FHIR CarePlan resource for a treatment plan
    pub fn care_plan_resource(&self, patient: &Patient, plan: &TreatmentPlan) -> Value {
        let goals: Vec<Value> = plan
            .treatment_goals
            .iter()
            .map(|goal| json!({ "display": goal }))
            .collect();

        let mut activities = Vec::new();
        for (medications, status) in [
            (&plan.current_medications, "in-progress"),
            (&plan.planned_medications, "not-started"),
        ] {
            for medication in medications {
                activities.push(json!({
                    "detail": {
                        "category": {
                            "coding": [{
                                "system": terminology::CAREPLAN_ACTIVITY_CATEGORY,
                                "code": "drug",
                                "display": "Drug",
                            }],
                        },
                        "code": { "text": medication },
                        "status": status,
                    },
                }));
            }
        }

        let mut care_plan = json!({
            "resourceType": "CarePlan",
            "id": plan.plan_id.as_str(),
            "meta": self.meta(plan.updated_at, "EpilepsyCarePlan"),
            "status": "active",
            "intent": "plan",
            "category": [{
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/careplan-category",
                    "code": "assess-plan",
                    "display": "Assessment and Plan of Treatment",
                }],
            }],
            "title": "Epilepsy Treatment Plan",
            "description": "Comprehensive treatment plan for epilepsy management",
            "subject": self.subject(patient),
            "period": { "start": plan.plan_date.to_string() },
            "goal": goals,
            "activity": activities,
        });

        let obj = as_object_mut(&mut care_plan);
        if let Some(physician) = &plan.treating_physician {
            obj.insert("author".to_string(), json!({ "display": physician }));
        }
        if let Some(notes) = &plan.notes {
            obj.insert("note".to_string(), json!([{ "text": notes }]));
        }

        care_plan
    }

    /// FHIR Bundle of type `collection` for the full patient record
    ///
    /// Entry order is patient, condition (when a diagnosis exists), then
    /// one observation per seizure event in sequence order. The bundle
    /// `total` equals the entry count.
    pub fn bundle_resource(&self, patient: &Patient, now: DateTime<Utc>) -> Value {
        let mut entries = vec![json!({
            "fullUrl": format!("{}/Patient/{}", self.base_url, patient.patient_id()),
            "resource": self.patient_resource(patient),
        })];

        if let Some(diagnosis) = &patient.diagnosis {
            entries.push(json!({
                "fullUrl": format!("{}/Condition/{}", self.base_url, diagnosis.diagnosis_id),
                "resource": self.condition_resource(patient, diagnosis),
            }));
        }

        for event in patient.seizure_events() {
            entries.push(json!({
                "fullUrl": format!("{}/Observation/{}", self.base_url, event.event_id),
                "resource": self.observation_resource(patient, event),
            }));
        }

        json!({
            "resourceType": "Bundle",
            "id": format!("patient-{}-bundle", patient.patient_id()),
            "meta": self.meta(now, "EpilepsyBundle"),
            "type": "collection",
            "timestamp": now.to_rfc3339(),
            "total": entries.len(),
            "entry": entries,
        })
    }
}

/// The `json!` macro always yields an object here
fn as_object_mut(value: &mut Value) -> &mut Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("resource root is always a JSON object"),
    }
}
