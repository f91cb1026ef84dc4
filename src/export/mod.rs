//! Document export
//!
//! Writes generated documents to disk as pretty-printed JSON and produces
//! a manifest describing every file written, with an optional SHA-256
//! checksum per file for downstream integrity verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analytics;
use crate::domain::{IctusError, Patient, Result};
use crate::transform::{DocumentSchema, TransformEngine};

/// One file written during an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedFile {
    /// Document label: a schema tag or `summary`
    pub label: String,
    pub path: PathBuf,
    pub bytes: u64,
    /// Hex-encoded SHA-256 of the file contents, when enabled
    pub checksum: Option<String>,
}

/// Manifest for one patient export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportManifest {
    pub patient_id: String,
    pub created_at: DateTime<Utc>,
    pub files: Vec<ExportedFile>,
}

/// Default export filename: `{label}_{patient_id}_{YYYYMMDD_HHMMSS}.json`
pub fn default_filename(label: &str, patient_id: &str, now: DateTime<Utc>) -> String {
    format!("{label}_{patient_id}_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes documents into an output directory
#[derive(Debug, Clone)]
pub struct DocumentExporter {
    output_dir: PathBuf,
    checksum: bool,
}

impl DocumentExporter {
    /// Creates an exporter targeting the given directory
    pub fn new(output_dir: impl Into<PathBuf>, checksum: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            checksum,
        }
    }

    /// Writes one document as pretty-printed JSON
    ///
    /// Creates the output directory if missing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error carrying the target path if the directory or
    /// file cannot be written, or a serialization error for unserializable
    /// input.
    pub fn write_document(
        &self,
        label: &str,
        document: &Value,
        filename: &str,
    ) -> Result<ExportedFile> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| IctusError::io(&self.output_dir, &e))?;
        let path = self.output_dir.join(filename);

        let bytes = serde_json::to_vec_pretty(document)?;
        write_bytes(&path, &bytes)?;

        let checksum = self.checksum.then(|| sha256_hex(&bytes));
        info!(label, path = %path.display(), bytes = bytes.len(), "exported document");

        Ok(ExportedFile {
            label: label.to_string(),
            path,
            bytes: bytes.len() as u64,
            checksum,
        })
    }

    /// Exports all four schema documents plus the analytics summary
    ///
    /// # Errors
    ///
    /// Returns the first generation or write error encountered; files
    /// already written are left in place.
    pub fn export_all(
        &self,
        engine: &TransformEngine,
        patient: &Patient,
        now: DateTime<Utc>,
    ) -> Result<ExportManifest> {
        let patient_id = patient.patient_id().to_string();
        let mut files = Vec::with_capacity(5);

        for schema in DocumentSchema::all() {
            let document = match schema {
                DocumentSchema::Fhir => engine.fhir.bundle_resource(patient, now),
                DocumentSchema::OpenEhr => engine.openehr.composition(patient, now),
                DocumentSchema::Registry => engine.registry.exchange_bundle(patient, now)?,
                DocumentSchema::Exchange => engine.exchange.patient_record(patient, now),
            };
            let filename = default_filename(schema.as_tag(), &patient_id, now);
            files.push(self.write_document(schema.as_tag(), &document, &filename)?);
        }

        let summary = analytics::patient_summary(patient, now)?;
        let filename = default_filename("summary", &patient_id, now);
        files.push(self.write_document("summary", &summary, &filename)?);

        Ok(ExportManifest {
            patient_id,
            created_at: now,
            files,
        })
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|e| IctusError::io(path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| IctusError::io(path, &e))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    format!("{digest:x}")
}
