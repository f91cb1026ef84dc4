//! Epilepsy diagnosis
//!
//! A diagnosis belongs to exactly one patient. Every clinical field beyond
//! the owning patient reference is optional.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::enums::{EpilepsyType, SeizureType, SeverityLevel};
use crate::domain::errors::IctusError;
use crate::domain::ids::{DiagnosisId, PatientId};
use crate::domain::validation;

/// Epilepsy diagnosis record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    pub diagnosis_id: DiagnosisId,
    pub patient_id: PatientId,
    pub epilepsy_type: Option<EpilepsyType>,
    pub seizure_types: Vec<SeizureType>,
    pub severity_level: Option<SeverityLevel>,
    pub age_at_onset: Option<u8>,
    pub diagnosis_date: Option<NaiveDate>,
    pub diagnosing_physician: Option<String>,
    pub etiology: Option<String>,
    pub eeg_findings: Option<String>,
    pub mri_findings: Option<String>,
    pub comorbidities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Diagnosis {
    /// Creates an empty diagnosis for the given patient
    pub fn new(patient_id: PatientId) -> Self {
        let now = Utc::now();
        Self {
            diagnosis_id: DiagnosisId::generate(),
            patient_id,
            epilepsy_type: None,
            seizure_types: Vec::new(),
            severity_level: None,
            age_at_onset: None,
            diagnosis_date: None,
            diagnosing_physician: None,
            etiology: None,
            eeg_findings: None,
            mri_findings: None,
            comorbidities: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_epilepsy_type(mut self, epilepsy_type: EpilepsyType) -> Self {
        self.epilepsy_type = Some(epilepsy_type);
        self
    }

    pub fn with_severity(mut self, severity: SeverityLevel) -> Self {
        self.severity_level = Some(severity);
        self
    }

    /// Sets the age at onset, rejecting implausible values
    pub fn with_age_at_onset(mut self, age: u8) -> Result<Self, IctusError> {
        if !validation::is_valid_onset_age(age) {
            return Err(IctusError::Validation(format!(
                "age at onset must be between 0 and 120, got {age}"
            )));
        }
        self.age_at_onset = Some(age);
        Ok(self)
    }

    /// Sets the diagnosis date, rejecting future dates
    pub fn with_diagnosis_date(mut self, date: NaiveDate) -> Result<Self, IctusError> {
        if date > Utc::now().date_naive() {
            return Err(IctusError::Validation(
                "diagnosis date cannot be in the future".to_string(),
            ));
        }
        self.diagnosis_date = Some(date);
        Ok(self)
    }

    pub fn with_physician(mut self, physician: impl Into<String>) -> Self {
        self.diagnosing_physician = Some(physician.into());
        self
    }

    pub fn with_etiology(mut self, etiology: impl Into<String>) -> Self {
        self.etiology = Some(etiology.into());
        self
    }

    pub fn with_eeg_findings(mut self, findings: impl Into<String>) -> Self {
        self.eeg_findings = Some(findings.into());
        self
    }

    pub fn with_mri_findings(mut self, findings: impl Into<String>) -> Self {
        self.mri_findings = Some(findings.into());
        self
    }

    pub fn with_comorbidity(mut self, comorbidity: impl Into<String>) -> Self {
        self.comorbidities.push(comorbidity.into());
        self
    }

    pub fn with_seizure_type(mut self, seizure_type: SeizureType) -> Self {
        self.seizure_types.push(seizure_type);
        self
    }
}
