//! Export command implementation
//!
//! Generates all four exchange documents plus the analytics summary for a
//! patient record and writes them to the output directory.

use chrono::Utc;
use clap::Args;

use crate::export::DocumentExporter;
use crate::transform::TransformEngine;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the patient record JSON file
    #[arg(short, long)]
    pub patient: String,

    /// Override the configured output directory
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Skip per-file checksums
    #[arg(long)]
    pub no_checksum: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(patient = %self.patient, "Starting export command");

        let config = super::load_or_default(config_path)?;
        let patient = match super::read_patient(&self.patient) {
            Ok(p) => p,
            Err(e) => {
                println!("❌ Failed to read patient record: {e}");
                return Ok(3);
            }
        };

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());
        let checksum = config.export.checksum && !self.no_checksum;

        let engine = TransformEngine::from_config(&config.exchange);
        let exporter = DocumentExporter::new(&output_dir, checksum);
        let manifest = exporter.export_all(&engine, &patient, Utc::now())?;

        println!("✅ Exported {} documents for patient {}", manifest.files.len(), manifest.patient_id);
        for file in &manifest.files {
            match &file.checksum {
                Some(checksum) => println!(
                    "   {} -> {} ({} bytes, sha256 {})",
                    file.label,
                    file.path.display(),
                    file.bytes,
                    &checksum[..12]
                ),
                None => println!(
                    "   {} -> {} ({} bytes)",
                    file.label,
                    file.path.display(),
                    file.bytes
                ),
            }
        }
        Ok(0)
    }
}
