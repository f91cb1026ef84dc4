//! Configuration schema types
//!
//! Root configuration structure mapping to the TOML file, with serde
//! defaults so a minimal file (or none at all) still yields a working
//! configuration.

use serde::{Deserialize, Serialize};

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IctusConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Exchange identity settings used by the document generators
    #[serde(default)]
    pub exchange: ExchangeConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl IctusConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message naming the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.exchange.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid application.log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Identity settings for the exchange document generators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// FHIR base URL used in resource references and profiles
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// FHIR version marker
    #[serde(default = "default_fhir_version")]
    pub fhir_version: String,

    /// Registry organization identifier, embedded in record ids
    #[serde(default = "default_organization_id")]
    pub organization_id: String,

    /// Source system identifier stamped on registry records
    #[serde(default = "default_system_id")]
    pub system_id: String,

    /// Facility identifier for exchange-network records
    #[serde(default = "default_facility_id")]
    pub facility_id: String,

    /// Composition language (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,

    /// Composition territory (ISO 3166-1)
    #[serde(default = "default_territory")]
    pub territory: String,
}

impl ExchangeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("exchange.base_url cannot be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("exchange.base_url must start with http:// or https://".to_string());
        }
        for (name, value) in [
            ("exchange.organization_id", &self.organization_id),
            ("exchange.system_id", &self.system_id),
            ("exchange.facility_id", &self.facility_id),
        ] {
            if value.is_empty() {
                return Err(format!("{name} cannot be empty"));
            }
        }
        if self.language.len() != 2 {
            return Err(format!(
                "exchange.language must be a two-letter ISO 639-1 code, got '{}'",
                self.language
            ));
        }
        if self.territory.len() != 2 {
            return Err(format!(
                "exchange.territory must be a two-letter ISO 3166-1 code, got '{}'",
                self.territory
            ));
        }
        Ok(())
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fhir_version: default_fhir_version(),
            organization_id: default_organization_id(),
            system_id: default_system_id(),
            facility_id: default_facility_id(),
            language: default_language(),
            territory: default_territory(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported documents are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Record a SHA-256 checksum per exported file
    #[serde(default = "default_true")]
    pub checksum: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            checksum: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://epilepsy.example.org/fhir".to_string()
}

fn default_fhir_version() -> String {
    "4.0.1".to_string()
}

fn default_organization_id() -> String {
    "ICTUS-ORG".to_string()
}

fn default_system_id() -> String {
    "ICTUS-SYS-001".to_string()
}

fn default_facility_id() -> String {
    "ICTUS-FAC-001".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_territory() -> String {
    "US".to_string()
}

fn default_output_dir() -> String {
    "exports".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_true() -> bool {
    true
}
