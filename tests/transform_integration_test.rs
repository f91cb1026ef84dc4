//! Integration tests for the transformation engine
//!
//! Generates all four document schemas from one patient fixture and checks
//! the invariants that hold across schemas: event counts agree everywhere,
//! generated documents pass compliance validation, and sparse patients
//! produce structurally complete documents.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use ictus::compliance::{self, CheckStatus};
use ictus::config::ExchangeConfig;
use ictus::domain::enums::{EpilepsyType, Gender, SeizureType, SeverityLevel};
use ictus::domain::{Demographics, Diagnosis, Patient, SeizureEvent};
use ictus::transform::{DocumentSchema, TransformEngine};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 28, 10, 0, 0).unwrap()
}

fn engine() -> TransformEngine {
    TransformEngine::from_config(&ExchangeConfig::default())
}

/// A fully populated patient: demographics, diagnosis, three events
fn full_patient() -> Patient {
    let demographics = Demographics::new("Maria", "Santos")
        .unwrap()
        .with_date_of_birth(NaiveDate::from_ymd_opt(1988, 4, 12).unwrap())
        .unwrap()
        .with_gender(Gender::Female)
        .with_email("maria.santos@example.org")
        .unwrap()
        .with_phone("+1-555-0142")
        .unwrap()
        .with_address("12 Harbor St", "Springfield", "IL", "62701")
        .unwrap()
        .with_insurance("Acme Health", "INS-99812")
        .with_emergency_contact("Luis Santos", Some("+1-555-0143".to_string()));
    let mut patient = Patient::new(demographics);

    let diagnosis = Diagnosis::new(patient.patient_id().clone())
        .with_epilepsy_type(EpilepsyType::Focal)
        .with_severity(SeverityLevel::Moderate)
        .with_age_at_onset(14)
        .unwrap()
        .with_diagnosis_date(NaiveDate::from_ymd_opt(2003, 9, 2).unwrap())
        .unwrap()
        .with_physician("Dr. Chen")
        .with_etiology("structural")
        .with_eeg_findings("left temporal spikes");
    patient.set_diagnosis(diagnosis);

    for (day, seizure_type, severity) in [
        (3, SeizureType::FocalAware, 3),
        (12, SeizureType::FocalImpairedAwareness, 6),
        (20, SeizureType::FocalAware, 4),
    ] {
        let event = SeizureEvent::new(patient.patient_id().clone())
            .with_seizure_type(seizure_type)
            .with_occurred_at(Utc.with_ymd_and_hms(2026, 8, day, 7, 30, 0).unwrap())
            .with_duration_minutes(2.5)
            .unwrap()
            .with_severity(severity)
            .unwrap()
            .with_stress_level(5)
            .unwrap()
            .with_trigger("sleep deprivation");
        patient.add_seizure_event(event);
    }
    patient
}

/// A minimal patient: names only
fn sparse_patient() -> Patient {
    Patient::new(Demographics::new("Jo", "Ng").unwrap())
}

#[test]
fn test_event_count_agrees_across_schemas() {
    let patient = full_patient();
    let e = engine();

    let bundle = e.fhir.bundle_resource(&patient, now());
    let composition = e.openehr.composition(&patient, now());
    let record = e.registry.health_record(&patient, now());
    let exchange = e.exchange.patient_record(&patient, now());

    let events = patient.seizure_events().len();
    // FHIR: patient + condition + one observation per event
    let entries = bundle["entry"].as_array().unwrap();
    assert_eq!(entries.len(), 2 + events);
    assert_eq!(bundle["total"], 2 + events);
    // openEHR: person data + diagnosis + one observation per event
    assert_eq!(composition["content"].as_array().unwrap().len(), 2 + events);
    // registry and exchange: one encounter per event
    assert_eq!(
        record["data_elements"]["encounters"].as_array().unwrap().len(),
        events
    );
    assert_eq!(exchange["encounters"].as_array().unwrap().len(), events);
}

#[test]
fn test_fhir_bundle_entry_order() {
    let bundle = engine().fhir.bundle_resource(&full_patient(), now());
    let types: Vec<&str> = bundle["entry"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["resource"]["resourceType"].as_str().unwrap())
        .collect();
    assert_eq!(types[0], "Patient");
    assert_eq!(types[1], "Condition");
    assert!(types[2..].iter().all(|t| *t == "Observation"));
}

#[test]
fn test_generated_documents_pass_compliance() {
    let patient = full_patient();
    let e = engine();

    let documents = [
        (DocumentSchema::Fhir, e.fhir.bundle_resource(&patient, now())),
        (DocumentSchema::OpenEhr, e.openehr.composition(&patient, now())),
        (DocumentSchema::Registry, e.registry.health_record(&patient, now())),
        (DocumentSchema::Exchange, e.exchange.patient_record(&patient, now())),
    ];

    for (schema, document) in documents {
        let report = compliance::validate_document(schema, &document, now()).unwrap();
        assert!(report.is_compliant, "{schema} document failed compliance");
        assert_eq!(report.compliance_score, 1.0);
        assert_eq!(report.checks.len(), 5);
        assert!(report.checks.iter().all(|c| c.status == CheckStatus::Pass));
    }
}

#[test]
fn test_sparse_patient_still_produces_complete_documents() {
    let patient = sparse_patient();
    let e = engine();

    let bundle = e.fhir.bundle_resource(&patient, now());
    // patient resource only, no condition without a diagnosis
    assert_eq!(bundle["entry"].as_array().unwrap().len(), 1);
    let resource = &bundle["entry"][0]["resource"];
    assert!(resource["birthDate"].is_null());
    assert_eq!(resource["telecom"].as_array().unwrap().len(), 0);

    let composition = e.openehr.composition(&patient, now());
    // person data entry is always present
    assert_eq!(composition["content"].as_array().unwrap().len(), 1);

    let record = e.registry.health_record(&patient, now());
    assert!(record["data_elements"]["demographics"]["gender"].is_null());
    assert_eq!(record["data_elements"]["treatments"].as_array().unwrap().len(), 0);

    let exchange = e.exchange.patient_record(&patient, now());
    assert!(exchange["demographics"]["address"]["city"].is_null());
    assert_eq!(exchange["medications"].as_array().unwrap().len(), 0);
}

#[test]
fn test_sparse_patient_documents_are_compliant() {
    let patient = sparse_patient();
    let e = engine();
    for (schema, document) in [
        (DocumentSchema::Fhir, e.fhir.bundle_resource(&patient, now())),
        (DocumentSchema::OpenEhr, e.openehr.composition(&patient, now())),
        (DocumentSchema::Registry, e.registry.health_record(&patient, now())),
        (DocumentSchema::Exchange, e.exchange.patient_record(&patient, now())),
    ] {
        let report = compliance::validate_document(schema, &document, now()).unwrap();
        assert!(report.is_compliant, "{schema} sparse document failed compliance");
    }
}

#[test]
fn test_exchange_bundle_validation_embedded() {
    let bundle = engine().registry.exchange_bundle(&full_patient(), now()).unwrap();
    assert_eq!(bundle["validation_results"]["is_compliant"], true);
    assert_eq!(
        bundle["health_record"]["record_id"],
        bundle["registry_entry"]["record_metadata"]["record_id"]
    );
}

#[test]
fn test_patient_record_roundtrips_through_json() {
    let patient = full_patient();
    let serialized = serde_json::to_string(&patient).unwrap();
    let restored: Patient = serde_json::from_str(&serialized).unwrap();

    assert_eq!(restored.patient_id(), patient.patient_id());
    assert_eq!(restored.seizure_events().len(), patient.seizure_events().len());

    // generators produce equivalent clinical content for the restored patient
    let e = engine();
    let original = e.exchange.patient_record(&patient, now());
    let roundtripped = e.exchange.patient_record(&restored, now());
    assert_eq!(original, roundtripped);
}
