//! Patient demographics
//!
//! Demographic information for a patient. The patient identifier is
//! generated once at construction and is immutable thereafter.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::enums::Gender;
use crate::domain::errors::IctusError;
use crate::domain::ids::PatientId;
use crate::domain::validation;

/// Patient demographic record
///
/// Only the name parts are required; every other field is optional and
/// its absence is never an error downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demographics {
    pub patient_id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub ethnicity: Option<String>,
    pub race: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Demographics {
    /// Creates a demographics record with a freshly generated patient id
    ///
    /// # Errors
    ///
    /// Returns a validation error if either name part is empty.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Result<Self, IctusError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty() {
            return Err(IctusError::Validation("first name is required".to_string()));
        }
        if last_name.trim().is_empty() {
            return Err(IctusError::Validation("last name is required".to_string()));
        }
        let now = Utc::now();
        Ok(Self {
            patient_id: PatientId::generate(),
            first_name,
            last_name,
            date_of_birth: None,
            gender: None,
            ethnicity: None,
            race: None,
            address: None,
            city: None,
            state: None,
            zip_code: None,
            phone_number: None,
            email: None,
            emergency_contact: None,
            emergency_phone: None,
            insurance_provider: None,
            insurance_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Sets the birth date, rejecting future or implausible dates
    pub fn with_date_of_birth(mut self, dob: NaiveDate) -> Result<Self, IctusError> {
        let today = Utc::now().date_naive();
        if !validation::is_valid_birth_date(dob, today) {
            return Err(IctusError::Validation(format!(
                "invalid date of birth: {dob}"
            )));
        }
        self.date_of_birth = Some(dob);
        Ok(self)
    }

    /// Sets the gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets the email address, validating its format
    pub fn with_email(mut self, email: impl Into<String>) -> Result<Self, IctusError> {
        let email = email.into();
        if !validation::is_valid_email(&email) {
            return Err(IctusError::Validation(format!(
                "invalid email format: '{email}'"
            )));
        }
        self.email = Some(email);
        Ok(self)
    }

    /// Sets the phone number, validating its format
    pub fn with_phone(mut self, phone: impl Into<String>) -> Result<Self, IctusError> {
        let phone = phone.into();
        if !validation::is_valid_phone(&phone) {
            return Err(IctusError::Validation(format!(
                "invalid phone number: '{phone}'"
            )));
        }
        self.phone_number = Some(phone);
        Ok(self)
    }

    /// Sets the street address parts
    pub fn with_address(
        mut self,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Result<Self, IctusError> {
        let zip = zip_code.into();
        if !validation::is_valid_zip_code(&zip) {
            return Err(IctusError::Validation(format!("invalid ZIP code: '{zip}'")));
        }
        self.address = Some(street.into());
        self.city = Some(city.into());
        self.state = Some(state.into());
        self.zip_code = Some(zip);
        Ok(self)
    }

    /// Sets insurance identifiers
    pub fn with_insurance(
        mut self,
        provider: impl Into<String>,
        insurance_id: impl Into<String>,
    ) -> Self {
        self.insurance_provider = Some(provider.into());
        self.insurance_id = Some(insurance_id.into());
        self
    }

    /// Sets the emergency contact
    pub fn with_emergency_contact(
        mut self,
        name: impl Into<String>,
        phone: Option<String>,
    ) -> Self {
        self.emergency_contact = Some(name.into());
        self.emergency_phone = phone;
        self
    }

    /// Whole-year age on the given date, None if birth date is absent
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        self.date_of_birth.map(|dob| validation::age_on(dob, today))
    }

    /// Whole-year age today, None if birth date is absent
    pub fn age(&self) -> Option<i32> {
        self.age_on(Utc::now().date_naive())
    }

    /// Full name as "First Last", trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_names() {
        assert!(Demographics::new("", "Doe").is_err());
        assert!(Demographics::new("Jane", " ").is_err());
        assert!(Demographics::new("Jane", "Doe").is_ok());
    }

    #[test]
    fn test_full_name() {
        let d = Demographics::new("Jane", "Doe").unwrap();
        assert_eq!(d.full_name(), "Jane Doe");
    }

    #[test]
    fn test_age_absent_without_birth_date() {
        let d = Demographics::new("Jane", "Doe").unwrap();
        assert_eq!(d.age(), None);
    }

    #[test]
    fn test_age_on_reference_date() {
        let d = Demographics::new("Jane", "Doe")
            .unwrap()
            .with_date_of_birth(NaiveDate::from_ymd_opt(1990, 6, 15).unwrap())
            .unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 6, 14).unwrap();
        assert_eq!(d.age_on(today), Some(35));
        let today = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        assert_eq!(d.age_on(today), Some(36));
    }

    #[test]
    fn test_rejects_future_birth_date() {
        let future = Utc::now().date_naive() + chrono::Days::new(1);
        let result = Demographics::new("Jane", "Doe")
            .unwrap()
            .with_date_of_birth(future);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_email_and_phone() {
        let d = Demographics::new("Jane", "Doe").unwrap();
        assert!(d.clone().with_email("nope").is_err());
        assert!(d.with_phone("123").is_err());
    }

    #[test]
    fn test_patient_id_stable() {
        let d = Demographics::new("Jane", "Doe").unwrap();
        let id = d.patient_id.clone();
        let d = d.with_gender(Gender::Female);
        assert_eq!(d.patient_id, id);
    }
}
