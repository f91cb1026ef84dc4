//! # Ictus - Epilepsy Clinical Document Engine
//!
//! Ictus transforms epilepsy patient records into standardized exchange
//! documents and computes descriptive seizure analytics. Patient data is
//! modeled once as a validated domain aggregate, then projected into four
//! exchange schemas: FHIR R4, openEHR, an integrated-registry format, and
//! a health-information-exchange record.
//!
//! ## Architecture
//!
//! The library follows a layered architecture:
//!
//! - [`domain`] - The patient aggregate, clinical enumerations, and errors
//! - [`terminology`] - SNOMED CT, LOINC, and HL7 code-system tables
//! - [`transform`] - Document generators for the four exchange schemas
//! - [`compliance`] - Validation of generated documents against schema checks
//! - [`analytics`] - Seizure frequency, pattern, calendar, and trend analysis
//! - [`quality`] - Data-quality scoring for registry records
//! - [`export`] - JSON file export with manifests and checksums
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use ictus::config::ExchangeConfig;
//! use ictus::domain::{Demographics, Patient};
//! use ictus::transform::TransformEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let patient = Patient::new(Demographics::new("Jane", "Doe")?);
//!
//! let engine = TransformEngine::from_config(&ExchangeConfig::default());
//! let bundle = engine.fhir.bundle_resource(&patient, Utc::now());
//! assert_eq!(bundle["resourceType"], "Bundle");
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod cli;
pub mod compliance;
pub mod config;
pub mod domain;
pub mod export;
pub mod logging;
pub mod quality;
pub mod terminology;
pub mod transform;

pub use domain::{IctusError, Result};
