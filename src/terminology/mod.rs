//! Terminology registry
//!
//! Static tables mapping closed domain enumeration values to external
//! code-system entries, one lookup per target schema concern. Dispatch is
//! an exhaustive `match` over the closed enum with a mandatory default arm
//! for the absent/unknown case, so coverage is checked at build time and
//! lookup can never fail: an unmapped or absent value always resolves to
//! the schema's fallback entry.

use serde::Serialize;

use crate::domain::enums::{EpilepsyType, Gender, SeizureType, SeverityLevel};

/// SNOMED CT code system URI
pub const SNOMED_CT: &str = "http://snomed.info/sct";
/// LOINC code system URI
pub const LOINC: &str = "http://loinc.org";
/// UCUM units of measure system URI
pub const UCUM: &str = "http://unitsofmeasure.org";
/// HL7 v2 identifier type code system
pub const HL7_V2_0203: &str = "http://terminology.hl7.org/CodeSystem/v2-0203";
/// HL7 contact role code system
pub const HL7_V2_0131: &str = "http://terminology.hl7.org/CodeSystem/v2-0131";
/// FHIR condition clinical status code system
pub const CONDITION_CLINICAL: &str = "http://terminology.hl7.org/CodeSystem/condition-clinical";
/// FHIR condition verification status code system
pub const CONDITION_VER_STATUS: &str =
    "http://terminology.hl7.org/CodeSystem/condition-ver-status";
/// FHIR condition category code system
pub const CONDITION_CATEGORY: &str = "http://terminology.hl7.org/CodeSystem/condition-category";
/// FHIR observation category code system
pub const OBSERVATION_CATEGORY: &str =
    "http://terminology.hl7.org/CodeSystem/observation-category";
/// FHIR care plan activity category code system
pub const CAREPLAN_ACTIVITY_CATEGORY: &str =
    "http://terminology.hl7.org/CodeSystem/careplan-activity-category";
/// ICD-10 condition code for unspecified epilepsy
pub const ICD10_EPILEPSY: &str = "ICD-10:G40.9";

/// One (system, code, display) triple in an external vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeSystemEntry {
    pub system: &'static str,
    pub code: &'static str,
    pub display: &'static str,
}

impl CodeSystemEntry {
    const fn new(system: &'static str, code: &'static str, display: &'static str) -> Self {
        Self {
            system,
            code,
            display,
        }
    }

    /// Renders the entry as a FHIR `coding` object
    pub fn to_coding(&self) -> serde_json::Value {
        serde_json::json!({
            "system": self.system,
            "code": self.code,
            "display": self.display,
        })
    }
}

/// SNOMED CT entry for an epilepsy classification
///
/// Absent input resolves to the generic epilepsy concept.
pub fn snomed_epilepsy_type(epilepsy_type: Option<EpilepsyType>) -> CodeSystemEntry {
    match epilepsy_type {
        Some(EpilepsyType::Generalized) => {
            CodeSystemEntry::new(SNOMED_CT, "230456007", "Generalized epilepsy")
        }
        Some(EpilepsyType::Focal) => CodeSystemEntry::new(SNOMED_CT, "230407005", "Focal epilepsy"),
        Some(EpilepsyType::Combined) | Some(EpilepsyType::Unknown) | None => {
            CodeSystemEntry::new(SNOMED_CT, "84757009", "Epilepsy")
        }
    }
}

/// SNOMED CT entry for a diagnosis severity level
pub fn snomed_severity(severity: Option<SeverityLevel>) -> CodeSystemEntry {
    match severity {
        Some(SeverityLevel::Mild) => CodeSystemEntry::new(SNOMED_CT, "255604002", "Mild"),
        Some(SeverityLevel::Moderate) => CodeSystemEntry::new(SNOMED_CT, "6736007", "Moderate"),
        Some(SeverityLevel::Severe) => CodeSystemEntry::new(SNOMED_CT, "24484000", "Severe"),
        Some(SeverityLevel::Refractory) => {
            CodeSystemEntry::new(SNOMED_CT, "30745007", "Drug-resistant epilepsy")
        }
        None => CodeSystemEntry::new(SNOMED_CT, "261665006", "Unknown"),
    }
}

/// SNOMED CT entry for a seizure classification
///
/// Absent input resolves to the generic seizure concept.
pub fn snomed_seizure_type(seizure_type: Option<SeizureType>) -> CodeSystemEntry {
    match seizure_type {
        Some(SeizureType::GeneralizedTonicClonic) => {
            CodeSystemEntry::new(SNOMED_CT, "54200006", "Generalized tonic-clonic seizure")
        }
        Some(SeizureType::Absence) => CodeSystemEntry::new(SNOMED_CT, "25064002", "Absence seizure"),
        Some(SeizureType::Myoclonic) => {
            CodeSystemEntry::new(SNOMED_CT, "91175000", "Myoclonic seizure")
        }
        Some(SeizureType::Atonic) => CodeSystemEntry::new(SNOMED_CT, "91138005", "Atonic seizure"),
        Some(SeizureType::FocalAware) => {
            CodeSystemEntry::new(SNOMED_CT, "230401003", "Focal aware seizure")
        }
        Some(SeizureType::FocalImpairedAwareness) => {
            CodeSystemEntry::new(SNOMED_CT, "230402005", "Focal impaired awareness seizure")
        }
        Some(SeizureType::FocalToBilateralTonicClonic) => CodeSystemEntry::new(
            SNOMED_CT,
            "230403000",
            "Focal to bilateral tonic-clonic seizure",
        ),
        None => CodeSystemEntry::new(SNOMED_CT, "91175000", "Seizure"),
    }
}

/// Generic seizure concept used for the FHIR observation code
pub fn snomed_seizure() -> CodeSystemEntry {
    CodeSystemEntry::new(SNOMED_CT, "91175000", "Seizure")
}

/// FHIR administrative gender code (lowercase token per R4 value set)
pub fn fhir_gender(gender: Option<Gender>) -> &'static str {
    match gender {
        Some(Gender::Male) => "male",
        Some(Gender::Female) => "female",
        Some(Gender::Other) | Some(Gender::PreferNotToSay) => "other",
        None => "unknown",
    }
}

/// HL7 v2 identifier type entry for the medical record number
pub fn hl7_medical_record_number() -> CodeSystemEntry {
    CodeSystemEntry::new(HL7_V2_0203, "MR", "Medical Record Number")
}

/// HL7 v2 identifier type entry for an insurance member number
pub fn hl7_member_number() -> CodeSystemEntry {
    CodeSystemEntry::new(HL7_V2_0203, "MB", "Member Number")
}

/// HL7 contact role entry for an emergency contact
pub fn hl7_emergency_contact() -> CodeSystemEntry {
    CodeSystemEntry::new(HL7_V2_0131, "C", "Emergency Contact")
}

/// LOINC entry for an observed duration component
pub fn loinc_duration() -> CodeSystemEntry {
    CodeSystemEntry::new(LOINC, "72133-2", "Duration")
}

/// LOINC entry for an observed severity component
pub fn loinc_severity() -> CodeSystemEntry {
    CodeSystemEntry::new(LOINC, "72514-3", "Severity")
}

/// LOINC entry for a reported stress-level component
pub fn loinc_stress_level() -> CodeSystemEntry {
    CodeSystemEntry::new(LOINC, "93038-8", "Stress Level")
}

/// openEHR terminology code for the care-setting context
pub fn openehr_setting() -> CodeSystemEntry {
    CodeSystemEntry::new("openehr", "228", "primary medical care")
}

/// openEHR terminology code for a persistent composition category
pub fn openehr_persistent_category() -> CodeSystemEntry {
    CodeSystemEntry::new("openehr", "433", "persistent")
}
