//! Transformation engine
//!
//! Pure mapping functions from the domain model to four standardized
//! document shapes for external health-information exchange:
//!
//! - [`fhir`] - FHIR R4 resources and a collection Bundle
//! - [`openehr`] - openEHR patient-summary composition
//! - [`registry`] - integrated-registry health record and exchange bundle
//! - [`exchange`] - exchange-network patient record
//!
//! Generators are plain values constructed once by the composition root
//! and passed by reference; they hold only identity settings (base URL,
//! organization ids), never mutable state. Transformations read the
//! patient aggregate and never mutate it, so any number may run
//! concurrently over the same patient.

pub mod exchange;
pub mod fhir;
pub mod openehr;
pub mod registry;

pub use exchange::ExchangeGenerator;
pub use fhir::FhirGenerator;
pub use openehr::OpenEhrGenerator;
pub use registry::RegistryGenerator;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ExchangeConfig;

/// Target document schema tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSchema {
    /// FHIR R4 clinical resource bundle
    Fhir,
    /// openEHR structured composition
    OpenEhr,
    /// Integrated-registry envelope
    Registry,
    /// Exchange-network record
    Exchange,
}

impl DocumentSchema {
    /// All schemas, in export order
    pub fn all() -> [DocumentSchema; 4] {
        [
            DocumentSchema::Fhir,
            DocumentSchema::OpenEhr,
            DocumentSchema::Registry,
            DocumentSchema::Exchange,
        ]
    }

    /// Short tag used in filenames and reports
    pub fn as_tag(&self) -> &'static str {
        match self {
            DocumentSchema::Fhir => "fhir",
            DocumentSchema::OpenEhr => "openehr",
            DocumentSchema::Registry => "registry",
            DocumentSchema::Exchange => "exchange",
        }
    }

    /// JSON pointer to the document's stable identifier
    pub(crate) fn id_pointer(&self) -> &'static str {
        match self {
            DocumentSchema::Fhir => "/id",
            DocumentSchema::OpenEhr => "/uid",
            DocumentSchema::Registry => "/record_id",
            DocumentSchema::Exchange => "/patient_id",
        }
    }
}

impl fmt::Display for DocumentSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl std::str::FromStr for DocumentSchema {
    type Err = crate::domain::IctusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fhir" => Ok(DocumentSchema::Fhir),
            "openehr" => Ok(DocumentSchema::OpenEhr),
            "registry" => Ok(DocumentSchema::Registry),
            "exchange" => Ok(DocumentSchema::Exchange),
            other => Err(crate::domain::IctusError::Validation(format!(
                "unknown document schema: '{other}'"
            ))),
        }
    }
}

/// All four generators, constructed once from configuration
#[derive(Debug, Clone)]
pub struct TransformEngine {
    pub fhir: FhirGenerator,
    pub openehr: OpenEhrGenerator,
    pub registry: RegistryGenerator,
    pub exchange: ExchangeGenerator,
}

impl TransformEngine {
    /// Builds the engine from exchange-identity configuration
    pub fn from_config(config: &ExchangeConfig) -> Self {
        Self {
            fhir: FhirGenerator::new(&config.base_url, &config.fhir_version),
            openehr: OpenEhrGenerator::new(&config.language, &config.territory),
            registry: RegistryGenerator::new(&config.organization_id, &config.system_id),
            exchange: ExchangeGenerator::new(&config.facility_id),
        }
    }
}

/// Builds `"Label: value"` note texts, one per non-empty source field
///
/// Distinct note sources stay distinct entries; joining multiple sources
/// into one slot uses `"; "` (see [`joined_notes`]).
pub(crate) fn note_texts(sources: &[(&str, Option<&str>)]) -> Vec<String> {
    sources
        .iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| format!("{label}: {v}"))
        })
        .collect()
}

/// Joins note texts into a single slot with `"; "` between sources
pub(crate) fn joined_notes(sources: &[(&str, Option<&str>)]) -> Option<String> {
    let texts = note_texts(sources);
    if texts.is_empty() {
        None
    } else {
        Some(texts.join("; "))
    }
}
