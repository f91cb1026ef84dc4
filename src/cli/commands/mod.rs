//! CLI command implementations

pub mod analyze;
pub mod export;
pub mod init;
pub mod validate;
pub mod validate_document;

use crate::config::{default_config, load_config, IctusConfig};
use crate::domain::{IctusError, Patient};
use std::fs;
use std::path::Path;

/// Loads configuration, falling back to defaults when the file is absent
///
/// Every setting has a working default, so a missing configuration file
/// is not an error for commands that operate on patient data.
fn load_or_default(config_path: &str) -> crate::domain::Result<IctusConfig> {
    if Path::new(config_path).exists() {
        load_config(config_path)
    } else {
        tracing::debug!(config_path, "configuration file not found, using defaults");
        default_config()
    }
}

/// Reads a patient record from a JSON file
fn read_patient(path: &str) -> crate::domain::Result<Patient> {
    let contents = fs::read_to_string(path).map_err(|e| IctusError::io(Path::new(path), &e))?;
    let patient = serde_json::from_str(&contents)?;
    Ok(patient)
}
