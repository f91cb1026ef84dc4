//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::IctusConfig;
use crate::domain::{IctusError, Result};
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Parses the TOML into [`IctusConfig`]
/// 3. Applies environment variable overrides (ICTUS_* prefix)
/// 4. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, the TOML fails
/// to parse, or validation rejects a value.
pub fn load_config(path: impl AsRef<Path>) -> Result<IctusConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(IctusError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        IctusError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let mut config: IctusConfig = toml::from_str(&contents)
        .map_err(|e| IctusError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config
        .validate()
        .map_err(|e| IctusError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Default configuration with environment overrides applied
///
/// Used when no configuration file is given.
///
/// # Errors
///
/// Returns an error if an override leaves the configuration invalid.
pub fn default_config() -> Result<IctusConfig> {
    let mut config = IctusConfig::default();
    apply_env_overrides(&mut config);
    config
        .validate()
        .map_err(|e| IctusError::Configuration(format!("Configuration validation failed: {e}")))?;
    Ok(config)
}

/// Applies environment variable overrides using the ICTUS_* prefix
///
/// Variables follow the pattern `ICTUS_<SECTION>_<KEY>`, for example
/// `ICTUS_EXCHANGE_BASE_URL` or `ICTUS_EXPORT_OUTPUT_DIR`.
fn apply_env_overrides(config: &mut IctusConfig) {
    if let Ok(val) = std::env::var("ICTUS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("ICTUS_EXCHANGE_BASE_URL") {
        config.exchange.base_url = val;
    }
    if let Ok(val) = std::env::var("ICTUS_EXCHANGE_FHIR_VERSION") {
        config.exchange.fhir_version = val;
    }
    if let Ok(val) = std::env::var("ICTUS_EXCHANGE_ORGANIZATION_ID") {
        config.exchange.organization_id = val;
    }
    if let Ok(val) = std::env::var("ICTUS_EXCHANGE_SYSTEM_ID") {
        config.exchange.system_id = val;
    }
    if let Ok(val) = std::env::var("ICTUS_EXCHANGE_FACILITY_ID") {
        config.exchange.facility_id = val;
    }
    if let Ok(val) = std::env::var("ICTUS_EXCHANGE_LANGUAGE") {
        config.exchange.language = val;
    }
    if let Ok(val) = std::env::var("ICTUS_EXCHANGE_TERRITORY") {
        config.exchange.territory = val;
    }

    if let Ok(val) = std::env::var("ICTUS_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("ICTUS_EXPORT_CHECKSUM") {
        config.export.checksum = val.parse().unwrap_or(true);
    }

    if let Ok(val) = std::env::var("ICTUS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("ICTUS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("ICTUS_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/ictus.toml");
        assert!(matches!(result, Err(IctusError::Configuration(_))));
    }

    #[test]
    fn test_load_full_config() {
        let toml_content = r#"
[application]
log_level = "debug"

[exchange]
base_url = "https://fhir.hospital.example"
organization_id = "HOSP-01"
system_id = "HOSP-SYS"
facility_id = "HOSP-FAC"
language = "de"
territory = "DE"

[export]
output_dir = "/tmp/exports"
checksum = false

[logging]
local_enabled = false
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.exchange.base_url, "https://fhir.hospital.example");
        assert_eq!(config.exchange.language, "de");
        assert_eq!(config.export.output_dir, "/tmp/exports");
        assert!(!config.export.checksum);
        assert!(!config.logging.local_enabled);
        // unspecified values fall back to defaults
        assert_eq!(config.exchange.fhir_version, "4.0.1");
    }

    #[test]
    fn test_load_partial_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[application]\nlog_level = \"warn\"\n")
            .unwrap();
        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "warn");
        assert_eq!(config.exchange.organization_id, "ICTUS-ORG");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[exchange]\nbase_url = \"not-a-url\"\n")
            .unwrap();
        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_parse_error_surfaces() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[application\n").unwrap();
        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }
}
