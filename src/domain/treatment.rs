//! Treatment plans and prescriptions
//!
//! Treatment entities reference the patient and medications by plain
//! string identifier rather than ownership.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::enums::MedicationStatus;
use crate::domain::ids::{PatientId, PlanId, PrescriptionId};

/// Comprehensive treatment plan for a patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub plan_id: PlanId,
    pub patient_id: PatientId,
    pub plan_date: NaiveDate,
    pub treating_physician: Option<String>,
    pub treatment_goals: Vec<String>,
    /// Medication names currently in use
    pub current_medications: Vec<String>,
    /// Medication names planned but not started
    pub planned_medications: Vec<String>,
    pub monitoring_plan: Vec<String>,
    pub lifestyle_modifications: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TreatmentPlan {
    pub fn new(patient_id: PatientId) -> Self {
        let now = Utc::now();
        Self {
            plan_id: PlanId::generate(),
            patient_id,
            plan_date: now.date_naive(),
            treating_physician: None,
            treatment_goals: Vec::new(),
            current_medications: Vec::new(),
            planned_medications: Vec::new(),
            monitoring_plan: Vec::new(),
            lifestyle_modifications: Vec::new(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_physician(mut self, physician: impl Into<String>) -> Self {
        self.treating_physician = Some(physician.into());
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.treatment_goals.push(goal.into());
        self
    }

    pub fn with_current_medication(mut self, medication: impl Into<String>) -> Self {
        self.current_medications.push(medication.into());
        self
    }

    pub fn with_planned_medication(mut self, medication: impl Into<String>) -> Self {
        self.planned_medications.push(medication.into());
        self
    }

    pub fn with_monitoring(mut self, item: impl Into<String>) -> Self {
        self.monitoring_plan.push(item.into());
        self
    }

    pub fn with_lifestyle_modification(mut self, item: impl Into<String>) -> Self {
        self.lifestyle_modifications.push(item.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Medication prescription referencing a medication by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub prescription_id: PrescriptionId,
    pub patient_id: PatientId,
    /// Plain medication identifier (name), not an owned entity
    pub medication: String,
    pub prescribing_physician: Option<String>,
    pub prescription_date: NaiveDate,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub refills_remaining: u32,
    pub instructions: Option<String>,
    pub indication: Option<String>,
    pub status: MedicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prescription {
    pub fn new(patient_id: PatientId, medication: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            prescription_id: PrescriptionId::generate(),
            patient_id,
            medication: medication.into(),
            prescribing_physician: None,
            prescription_date: now.date_naive(),
            dosage: None,
            frequency: None,
            refills_remaining: 0,
            instructions: None,
            indication: None,
            status: MedicationStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_physician(mut self, physician: impl Into<String>) -> Self {
        self.prescribing_physician = Some(physician.into());
        self
    }

    pub fn with_dosage(mut self, dosage: impl Into<String>) -> Self {
        self.dosage = Some(dosage.into());
        self
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn with_refills(mut self, refills: u32) -> Self {
        self.refills_remaining = refills;
        self
    }

    pub fn with_indication(mut self, indication: impl Into<String>) -> Self {
        self.indication = Some(indication.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_status(mut self, status: MedicationStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_builder() {
        let plan = TreatmentPlan::new(PatientId::generate())
            .with_physician("Dr. Varga")
            .with_goal("Reduce seizure frequency by 50%")
            .with_current_medication("Levetiracetam")
            .with_planned_medication("Lamotrigine")
            .with_monitoring("Quarterly EEG");
        assert_eq!(plan.treatment_goals.len(), 1);
        assert_eq!(plan.current_medications, vec!["Levetiracetam"]);
        assert_eq!(plan.planned_medications, vec!["Lamotrigine"]);
    }

    #[test]
    fn test_prescription_defaults_active() {
        let rx = Prescription::new(PatientId::generate(), "Levetiracetam");
        assert_eq!(rx.status, MedicationStatus::Active);
        assert_eq!(rx.refills_remaining, 0);
        assert_eq!(rx.medication, "Levetiracetam");
    }
}
