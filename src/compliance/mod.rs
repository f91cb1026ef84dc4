//! Compliance validation
//!
//! Evaluates a generated document against the five compliance checks a
//! receiving network requires before accepting an exchange: required
//! fields, data format, privacy controls, interoperability standards, and
//! data governance. Each check verifies a fixed set of marker paths for
//! its schema, so a structurally broken document fails the matching check
//! instead of passing unexamined.
//!
//! A document with no resolvable identifier is not scoreable at all and
//! yields an error rather than a failed report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{IctusError, Result};
use crate::transform::DocumentSchema;

/// Outcome of a single compliance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// One named compliance check with its outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub name: String,
    pub description: String,
    pub status: CheckStatus,
    pub detail: String,
}

/// Full validation report for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub schema: DocumentSchema,
    pub document_id: String,
    pub checked_at: DateTime<Utc>,
    pub checks: Vec<ComplianceCheck>,
    /// Fraction of checks that passed, in `[0.0, 1.0]`
    pub compliance_score: f64,
    pub is_compliant: bool,
}

struct CheckSpec {
    name: &'static str,
    description: &'static str,
    markers: &'static [&'static str],
}

const fn spec(
    name: &'static str,
    description: &'static str,
    markers: &'static [&'static str],
) -> CheckSpec {
    CheckSpec {
        name,
        description,
        markers,
    }
}

fn check_specs(schema: DocumentSchema) -> [CheckSpec; 5] {
    match schema {
        DocumentSchema::Fhir => [
            spec(
                "Required Fields",
                "Verify required bundle fields are present",
                &["/resourceType", "/id"],
            ),
            spec(
                "Data Format",
                "Validate bundle type and entry accounting",
                &["/type", "/total", "/entry"],
            ),
            spec(
                "Privacy Controls",
                "Verify the subject is carried by managed identifiers",
                &["/entry/0/resource/identifier"],
            ),
            spec(
                "Interoperability Standards",
                "Check resource profile declarations",
                &["/meta/profile"],
            ),
            spec(
                "Data Governance",
                "Validate versioning and update metadata",
                &["/meta/versionId", "/meta/lastUpdated"],
            ),
        ],
        DocumentSchema::OpenEhr => [
            spec(
                "Required Fields",
                "Verify composition identity fields are present",
                &["/uid", "/archetype_node_id"],
            ),
            spec(
                "Data Format",
                "Validate language and territory coding",
                &["/language/code_string", "/territory/code_string"],
            ),
            spec(
                "Privacy Controls",
                "Verify the care-setting context is declared",
                &["/context/setting/defining_code/code_string"],
            ),
            spec(
                "Interoperability Standards",
                "Check archetype and terminology references",
                &["/category/defining_code/terminology_id/value"],
            ),
            spec(
                "Data Governance",
                "Validate composer and context attribution",
                &["/composer/name", "/context/start_time/value"],
            ),
        ],
        DocumentSchema::Registry => [
            spec(
                "Required Fields",
                "Verify required registry fields are present",
                &[
                    "/record_id",
                    "/patient_identifier",
                    "/source_system",
                    "/data_elements",
                ],
            ),
            spec(
                "Data Format",
                "Validate declared format and encoding",
                &["/metadata/data_format", "/metadata/encoding"],
            ),
            spec(
                "Privacy Controls",
                "Verify privacy classification and access controls",
                &[
                    "/governance/privacy_classification",
                    "/governance/access_controls",
                ],
            ),
            spec(
                "Interoperability Standards",
                "Check declared interoperability standards",
                &["/metadata/interoperability_standards"],
            ),
            spec(
                "Data Governance",
                "Validate data steward and retention policy",
                &["/governance/data_steward", "/governance/retention_period"],
            ),
        ],
        DocumentSchema::Exchange => [
            spec(
                "Required Fields",
                "Verify required record identity fields are present",
                &["/patient_id", "/facility_id", "/medical_record_number"],
            ),
            spec(
                "Data Format",
                "Validate clinical collection structure",
                &["/demographics", "/conditions", "/encounters"],
            ),
            spec(
                "Privacy Controls",
                "Verify contact blocks are structured, not free text",
                &["/demographics/contact", "/demographics/emergency_contact"],
            ),
            spec(
                "Interoperability Standards",
                "Check all exchange collections are declared",
                &["/medications", "/lab_results"],
            ),
            spec(
                "Data Governance",
                "Validate update tracking",
                &["/last_updated"],
            ),
        ],
    }
}

/// Validates a generated document against its schema's compliance checks
///
/// # Errors
///
/// Returns an error if the document's identifier cannot be resolved, since
/// an unidentifiable document cannot be reported on.
pub fn validate_document(
    schema: DocumentSchema,
    document: &Value,
    checked_at: DateTime<Utc>,
) -> Result<ComplianceReport> {
    let document_id = document
        .pointer(schema.id_pointer())
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            IctusError::Transform(format!(
                "{schema} document has no identifier at '{}'",
                schema.id_pointer()
            ))
        })?
        .to_string();

    let checks: Vec<ComplianceCheck> = check_specs(schema)
        .into_iter()
        .map(|spec| evaluate(spec, document))
        .collect();

    let passed = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Pass)
        .count();
    let compliance_score = passed as f64 / checks.len() as f64;
    let is_compliant = passed == checks.len();

    if is_compliant {
        debug!(%schema, document_id, "document passed compliance validation");
    } else {
        warn!(
            %schema,
            document_id,
            passed,
            total = checks.len(),
            "document failed compliance validation"
        );
    }

    Ok(ComplianceReport {
        schema,
        document_id,
        checked_at,
        checks,
        compliance_score,
        is_compliant,
    })
}

fn evaluate(spec: CheckSpec, document: &Value) -> ComplianceCheck {
    let missing: Vec<&str> = spec
        .markers
        .iter()
        .filter(|marker| {
            document
                .pointer(marker)
                .map(Value::is_null)
                .unwrap_or(true)
        })
        .copied()
        .collect();

    let (status, detail) = if missing.is_empty() {
        (CheckStatus::Pass, "All required markers present".to_string())
    } else {
        (
            CheckStatus::Fail,
            format!("Missing markers: {}", missing.join(", ")),
        )
    };

    ComplianceCheck {
        name: spec.name.to_string(),
        description: spec.description.to_string(),
        status,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Demographics, Patient};
    use crate::transform::{
        ExchangeGenerator, FhirGenerator, OpenEhrGenerator, RegistryGenerator,
    };
    use chrono::TimeZone;
    use serde_json::json;

    fn patient() -> Patient {
        Patient::new(Demographics::new("Jane", "Doe").unwrap())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_generated_documents_are_compliant() {
        let p = patient();
        let cases = [
            (
                DocumentSchema::Fhir,
                FhirGenerator::new("https://ictus.health/fhir", "4.0.1").bundle_resource(&p, now()),
            ),
            (
                DocumentSchema::OpenEhr,
                OpenEhrGenerator::new("en", "US").composition(&p, now()),
            ),
            (
                DocumentSchema::Registry,
                RegistryGenerator::new("ORG", "SYS").health_record(&p, now()),
            ),
            (
                DocumentSchema::Exchange,
                ExchangeGenerator::new("FAC").patient_record(&p, now()),
            ),
        ];
        for (schema, document) in cases {
            let report = validate_document(schema, &document, now()).unwrap();
            assert!(report.is_compliant, "{schema} should be compliant");
            assert_eq!(report.compliance_score, 1.0);
            assert_eq!(report.checks.len(), 5);
        }
    }

    #[test]
    fn test_score_is_fraction_of_passed_checks() {
        let p = patient();
        let mut record = RegistryGenerator::new("ORG", "SYS").health_record(&p, now());
        record["governance"] = json!(null);
        let report = validate_document(DocumentSchema::Registry, &record, now()).unwrap();
        assert!(!report.is_compliant);
        // Privacy Controls and Data Governance both lose their markers
        assert_eq!(report.compliance_score, 3.0 / 5.0);
        let failed: Vec<&str> = report
            .checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(failed, vec!["Privacy Controls", "Data Governance"]);
    }

    #[test]
    fn test_failed_check_names_missing_markers() {
        let document = json!({ "record_id": "IHIA-ORG-x" });
        let report = validate_document(DocumentSchema::Registry, &document, now()).unwrap();
        let required = &report.checks[0];
        assert_eq!(required.status, CheckStatus::Fail);
        assert!(required.detail.contains("/patient_identifier"));
    }

    #[test]
    fn test_unidentifiable_document_is_an_error() {
        let document = json!({ "resourceType": "Bundle" });
        let err = validate_document(DocumentSchema::Fhir, &document, now()).unwrap_err();
        assert!(matches!(err, IctusError::Transform(_)));

        let empty_id = json!({ "patient_id": "" });
        assert!(validate_document(DocumentSchema::Exchange, &empty_id, now()).is_err());
    }

    #[test]
    fn test_report_serializes_with_lowercase_status() {
        let p = patient();
        let record = ExchangeGenerator::new("FAC").patient_record(&p, now());
        let report = validate_document(DocumentSchema::Exchange, &record, now()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["schema"], "exchange");
        assert_eq!(value["checks"][0]["status"], "pass");
    }
}
