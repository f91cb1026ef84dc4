//! Closed clinical enumerations
//!
//! Each enum parses strictly from its human-readable label: an unrecognized
//! string is a rejected-input error, never silently coerced to a default.
//! `Display` renders the same label, so serialized values round-trip.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::IctusError;

/// Administrative gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = IctusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            "Prefer not to say" => Ok(Gender::PreferNotToSay),
            other => Err(IctusError::Validation(format!(
                "invalid gender value: '{other}'"
            ))),
        }
    }
}

/// Epilepsy classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpilepsyType {
    Generalized,
    Focal,
    Combined,
    Unknown,
}

impl EpilepsyType {
    pub fn label(&self) -> &'static str {
        match self {
            EpilepsyType::Generalized => "Generalized",
            EpilepsyType::Focal => "Focal",
            EpilepsyType::Combined => "Combined",
            EpilepsyType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EpilepsyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EpilepsyType {
    type Err = IctusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Generalized" => Ok(EpilepsyType::Generalized),
            "Focal" => Ok(EpilepsyType::Focal),
            "Combined" => Ok(EpilepsyType::Combined),
            "Unknown" => Ok(EpilepsyType::Unknown),
            other => Err(IctusError::Validation(format!(
                "invalid epilepsy type: '{other}'"
            ))),
        }
    }
}

/// ILAE-style seizure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeizureType {
    GeneralizedTonicClonic,
    Absence,
    Myoclonic,
    Atonic,
    FocalAware,
    FocalImpairedAwareness,
    FocalToBilateralTonicClonic,
}

impl SeizureType {
    pub fn label(&self) -> &'static str {
        match self {
            SeizureType::GeneralizedTonicClonic => "Generalized Tonic-Clonic",
            SeizureType::Absence => "Absence",
            SeizureType::Myoclonic => "Myoclonic",
            SeizureType::Atonic => "Atonic",
            SeizureType::FocalAware => "Focal Aware",
            SeizureType::FocalImpairedAwareness => "Focal Impaired Awareness",
            SeizureType::FocalToBilateralTonicClonic => "Focal to Bilateral Tonic-Clonic",
        }
    }

    /// All seizure types, in classification order
    pub fn all() -> [SeizureType; 7] {
        [
            SeizureType::GeneralizedTonicClonic,
            SeizureType::Absence,
            SeizureType::Myoclonic,
            SeizureType::Atonic,
            SeizureType::FocalAware,
            SeizureType::FocalImpairedAwareness,
            SeizureType::FocalToBilateralTonicClonic,
        ]
    }
}

impl fmt::Display for SeizureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeizureType {
    type Err = IctusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Generalized Tonic-Clonic" => Ok(SeizureType::GeneralizedTonicClonic),
            "Absence" => Ok(SeizureType::Absence),
            "Myoclonic" => Ok(SeizureType::Myoclonic),
            "Atonic" => Ok(SeizureType::Atonic),
            "Focal Aware" => Ok(SeizureType::FocalAware),
            "Focal Impaired Awareness" => Ok(SeizureType::FocalImpairedAwareness),
            "Focal to Bilateral Tonic-Clonic" => Ok(SeizureType::FocalToBilateralTonicClonic),
            other => Err(IctusError::Validation(format!(
                "invalid seizure type: '{other}'"
            ))),
        }
    }
}

/// Clinical severity of the epilepsy diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
    Mild,
    Moderate,
    Severe,
    Refractory,
}

impl SeverityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Mild => "Mild",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::Severe => "Severe",
            SeverityLevel::Refractory => "Refractory",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeverityLevel {
    type Err = IctusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mild" => Ok(SeverityLevel::Mild),
            "Moderate" => Ok(SeverityLevel::Moderate),
            "Severe" => Ok(SeverityLevel::Severe),
            "Refractory" => Ok(SeverityLevel::Refractory),
            other => Err(IctusError::Validation(format!(
                "invalid severity level: '{other}'"
            ))),
        }
    }
}

/// Prescription lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MedicationStatus {
    #[default]
    Active,
    Discontinued,
    TemporaryHold,
    DoseAdjustment,
}

impl MedicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MedicationStatus::Active => "Active",
            MedicationStatus::Discontinued => "Discontinued",
            MedicationStatus::TemporaryHold => "Temporary Hold",
            MedicationStatus::DoseAdjustment => "Dose Adjustment",
        }
    }
}

impl fmt::Display for MedicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MedicationStatus {
    type Err = IctusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(MedicationStatus::Active),
            "Discontinued" => Ok(MedicationStatus::Discontinued),
            "Temporary Hold" => Ok(MedicationStatus::TemporaryHold),
            "Dose Adjustment" => Ok(MedicationStatus::DoseAdjustment),
            other => Err(IctusError::Validation(format!(
                "invalid medication status: '{other}'"
            ))),
        }
    }
}
