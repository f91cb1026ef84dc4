//! Input format validation helpers
//!
//! Format checks used by entity constructors and available to callers
//! validating raw input before constructing domain values. Optional fields
//! are validated only when present; `None` always passes.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .unwrap_or_else(|e| panic!("invalid email pattern: {e}"))
    })
}

fn zip_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d{5}(-\d{4})?$").unwrap_or_else(|e| panic!("invalid zip pattern: {e}"))
    })
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email_regex().is_match(email)
}

/// Validate phone number: 10 or 11 digits after stripping punctuation
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    digits == 10 || digits == 11
}

/// Validate US ZIP code format (5 digits or 5+4)
pub fn is_valid_zip_code(zip: &str) -> bool {
    zip_regex().is_match(zip)
}

/// Validate a birth date: in the past, age between 0 and 120 years
pub fn is_valid_birth_date(dob: NaiveDate, today: NaiveDate) -> bool {
    if dob >= today {
        return false;
    }
    let age = age_on(dob, today);
    (0..=120).contains(&age)
}

/// Whole-year age on `today` for a given birth date
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Validate a 1-10 clinical scale value (severity, stress level)
pub fn is_valid_scale(value: u8) -> bool {
    (1..=10).contains(&value)
}

/// Validate a seizure duration in minutes (must be positive)
pub fn is_valid_duration(minutes: f64) -> bool {
    minutes > 0.0 && minutes.is_finite()
}

/// Validate an onset age (0-120 years)
pub fn is_valid_onset_age(age: u8) -> bool {
    age <= 120
}

/// Validate that an event timestamp is not in the future
pub fn is_valid_event_time(at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    at <= now
}
