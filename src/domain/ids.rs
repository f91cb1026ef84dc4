//! Domain identifier types
//!
//! Newtype wrappers for entity identifiers. Each identifier is a UUID v4
//! generated once at entity creation and never reassigned.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::errors::IctusError;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $label:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Parses an identifier from external input
            ///
            /// # Errors
            ///
            /// Returns a validation error if the input is empty.
            pub fn parse(id: impl Into<String>) -> Result<Self, IctusError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(IctusError::Validation(format!(
                        "{} cannot be empty",
                        $label
                    )));
                }
                Ok(Self(id))
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes self and returns the inner String
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IctusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

entity_id!(
    /// Patient identifier, derived once at record creation
    PatientId,
    "patient ID"
);
entity_id!(
    /// Epilepsy diagnosis identifier
    DiagnosisId,
    "diagnosis ID"
);
entity_id!(
    /// Seizure event identifier
    EventId,
    "event ID"
);
entity_id!(
    /// Treatment plan identifier
    PlanId,
    "plan ID"
);
entity_id!(
    /// Medication prescription identifier
    PrescriptionId,
    "prescription ID"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = PatientId::generate();
        let b = PatientId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(PatientId::parse("").is_err());
        assert!(PatientId::parse("   ").is_err());
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = EventId::parse("evt-42").unwrap();
        assert_eq!(id.as_str(), "evt-42");
        assert_eq!(format!("{id}"), "evt-42");
    }

    #[test]
    fn test_from_str() {
        let id: DiagnosisId = "dx-1".parse().unwrap();
        assert_eq!(id.as_str(), "dx-1");
    }

    #[test]
    fn test_serde_transparent() {
        let id = PatientId::parse("p-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-1\"");
        let back: PatientId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
