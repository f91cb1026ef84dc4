//! Core domain types and models
//!
//! The patient aggregate, its entities, closed clinical enumerations, and
//! the engine-wide error type. Everything downstream (terminology,
//! transformation, analytics, quality) operates on these types read-only.

pub mod demographics;
pub mod diagnosis;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod patient;
pub mod seizure;
pub mod treatment;
pub mod validation;

pub use demographics::Demographics;
pub use diagnosis::Diagnosis;
pub use enums::{EpilepsyType, Gender, MedicationStatus, SeizureType, SeverityLevel};
pub use errors::IctusError;
pub use ids::{DiagnosisId, EventId, PatientId, PlanId, PrescriptionId};
pub use patient::Patient;
pub use seizure::SeizureEvent;
pub use treatment::{Prescription, TreatmentPlan};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, IctusError>;
