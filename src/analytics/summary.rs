//! Combined patient summary report

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::analytics::{analyze_patterns, seizure_frequency};
use crate::domain::{Patient, Result};

/// Comprehensive summary report for one patient
///
/// Combines demographics, diagnosis details, pattern analysis, and 30-
/// and 90-day frequency metrics into a single document. A patient with no
/// timestamped events gets `null` for the pattern section rather than an
/// error, so the report is always produced.
///
/// # Errors
///
/// Returns an error only if a section fails to serialize.
pub fn patient_summary(patient: &Patient, now: DateTime<Utc>) -> Result<Value> {
    let demographics = &patient.demographics;

    let diagnosis = match &patient.diagnosis {
        Some(dx) => json!({
            "epilepsy_type": dx.epilepsy_type.map(|t| t.label()),
            "severity_level": dx.severity_level.map(|s| s.label()),
            "age_at_onset": dx.age_at_onset,
            "diagnosis_date": dx.diagnosis_date.map(|d| d.to_string()),
            "seizure_types": dx.seizure_types.iter().map(|t| t.label()).collect::<Vec<_>>(),
        }),
        None => Value::Null,
    };

    let seizure_analysis = match analyze_patterns(patient) {
        Ok(analysis) => serde_json::to_value(&analysis)?,
        Err(_) => Value::Null,
    };

    Ok(json!({
        "demographics": {
            "name": demographics.full_name(),
            "age": demographics.age_on(now.date_naive()),
            "gender": demographics.gender.map(|g| g.label()),
            "patient_id": patient.patient_id().as_str(),
        },
        "diagnosis": diagnosis,
        "seizure_analysis": seizure_analysis,
        "frequency_metrics": {
            "30_days": serde_json::to_value(&seizure_frequency(patient, 30, now)?)?,
            "90_days": serde_json::to_value(&seizure_frequency(patient, 90, now)?)?,
        },
        "report_generated": now.to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::{EpilepsyType, SeizureType};
    use crate::domain::{Demographics, Diagnosis, SeizureEvent};
    use chrono::{Duration, NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_summary_for_empty_patient() {
        let p = Patient::new(Demographics::new("Jane", "Doe").unwrap());
        let report = patient_summary(&p, now()).unwrap();
        assert_eq!(report["demographics"]["name"], "Jane Doe");
        assert!(report["demographics"]["age"].is_null());
        assert!(report["diagnosis"].is_null());
        assert!(report["seizure_analysis"].is_null());
        assert_eq!(report["frequency_metrics"]["30_days"]["total_seizures"], 0);
    }

    #[test]
    fn test_summary_includes_all_sections() {
        let demographics = Demographics::new("Jane", "Doe")
            .unwrap()
            .with_date_of_birth(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
            .unwrap();
        let mut p = Patient::new(demographics);
        p.set_diagnosis(
            Diagnosis::new(p.patient_id().clone())
                .with_epilepsy_type(EpilepsyType::Generalized)
                .with_seizure_type(SeizureType::Absence),
        );
        for days_ago in [5, 50] {
            p.add_seizure_event(
                SeizureEvent::new(p.patient_id().clone())
                    .with_occurred_at(now() - Duration::days(days_ago)),
            );
        }

        let report = patient_summary(&p, now()).unwrap();
        assert_eq!(report["demographics"]["age"], 36);
        assert_eq!(report["diagnosis"]["epilepsy_type"], "Generalized");
        assert_eq!(report["diagnosis"]["seizure_types"][0], "Absence");
        assert_eq!(report["seizure_analysis"]["total_events"], 2);
        assert_eq!(report["frequency_metrics"]["30_days"]["total_seizures"], 1);
        assert_eq!(report["frequency_metrics"]["90_days"]["total_seizures"], 2);
    }
}
