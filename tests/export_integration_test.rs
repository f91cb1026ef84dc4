//! Integration tests for document export
//!
//! Runs a full export against a temporary directory and verifies the
//! manifest, file naming, contents, and checksum integrity end to end.

use chrono::{DateTime, TimeZone, Utc};
use ictus::config::ExchangeConfig;
use ictus::domain::{Demographics, Patient, SeizureEvent};
use ictus::export::{DocumentExporter, ExportManifest};
use ictus::transform::TransformEngine;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tempfile::tempdir;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 28, 14, 45, 30).unwrap()
}

fn patient_with_events() -> Patient {
    let mut patient = Patient::new(Demographics::new("Omar", "Haddad").unwrap());
    for day in [1, 8, 15] {
        patient.add_seizure_event(
            SeizureEvent::new(patient.patient_id().clone())
                .with_occurred_at(Utc.with_ymd_and_hms(2026, 8, day, 21, 0, 0).unwrap()),
        );
    }
    patient
}

#[test]
fn test_export_all_produces_named_files() {
    let dir = tempdir().unwrap();
    let exporter = DocumentExporter::new(dir.path(), true);
    let engine = TransformEngine::from_config(&ExchangeConfig::default());
    let patient = patient_with_events();

    let manifest = exporter.export_all(&engine, &patient, now()).unwrap();

    assert_eq!(manifest.files.len(), 5);
    let patient_id = patient.patient_id().to_string();
    for file in &manifest.files {
        let name = file.path.file_name().unwrap().to_string_lossy();
        assert_eq!(
            name,
            format!("{}_{}_20260828_144530.json", file.label, patient_id)
        );
        assert!(file.path.exists());
    }
}

#[test]
fn test_exported_files_are_valid_documents() {
    let dir = tempdir().unwrap();
    let exporter = DocumentExporter::new(dir.path(), false);
    let engine = TransformEngine::from_config(&ExchangeConfig::default());
    let patient = patient_with_events();

    let manifest = exporter.export_all(&engine, &patient, now()).unwrap();

    for file in &manifest.files {
        let content = std::fs::read_to_string(&file.path).unwrap();
        let document: Value = serde_json::from_str(&content).unwrap();
        match file.label.as_str() {
            "fhir" => assert_eq!(document["resourceType"], "Bundle"),
            "openehr" => assert!(document["uid"].as_str().unwrap().contains("::")),
            "registry" => assert_eq!(document["bundle_type"], "IHIA_Complete_Exchange"),
            "exchange" => {
                assert_eq!(document["patient_id"], patient.patient_id().to_string())
            }
            "summary" => assert!(document["seizure_analysis"].is_object()),
            other => panic!("unexpected export label: {other}"),
        }
    }
}

#[test]
fn test_manifest_checksums_match_file_contents() {
    let dir = tempdir().unwrap();
    let exporter = DocumentExporter::new(dir.path(), true);
    let engine = TransformEngine::from_config(&ExchangeConfig::default());

    let manifest = exporter
        .export_all(&engine, &patient_with_events(), now())
        .unwrap();

    for file in &manifest.files {
        let bytes = std::fs::read(&file.path).unwrap();
        assert_eq!(bytes.len() as u64, file.bytes);

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let recomputed = format!("{:x}", hasher.finalize());
        assert_eq!(file.checksum.as_deref(), Some(recomputed.as_str()));
    }
}

#[test]
fn test_manifest_roundtrips_through_json() {
    let dir = tempdir().unwrap();
    let exporter = DocumentExporter::new(dir.path(), true);
    let engine = TransformEngine::from_config(&ExchangeConfig::default());

    let manifest = exporter
        .export_all(&engine, &patient_with_events(), now())
        .unwrap();

    let serialized = serde_json::to_string(&manifest).unwrap();
    let restored: ExportManifest = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored.patient_id, manifest.patient_id);
    assert_eq!(restored.files.len(), manifest.files.len());
    assert_eq!(restored.files[0].checksum, manifest.files[0].checksum);
}

#[test]
fn test_export_creates_nested_output_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("out").join("patients");
    let exporter = DocumentExporter::new(&nested, false);
    let engine = TransformEngine::from_config(&ExchangeConfig::default());

    let manifest = exporter
        .export_all(&engine, &patient_with_events(), now())
        .unwrap();
    assert!(nested.is_dir());
    assert!(manifest.files.iter().all(|f| f.path.starts_with(&nested)));
}
