//! Document-level validation pipeline.

use crate::basic_info::{check_basic_info, extract_basic_info};
use crate::detect::detect_sections;
use crate::links::validate_links;
use crate::locate::find_field;
use crate::primitives::is_null_or_empty;
use crate::report::{
    CheckReport, SectionOutcome, SectionReport, SectionStatus, ValidationReport, ValidationStatus,
};
use crate::sections::{
    validate_certifications, validate_education, validate_experience, validate_projects,
};
use crate::taxonomy::{CORE_SECTIONS, category_aliases};
use serde_json::Value;

/// Validates one resume document.
///
/// Always returns a well-formed report. Non-object input yields the
/// `ERROR` envelope; everything else flows through detection, the four
/// core section validators, and the auxiliary link and identity checks.
pub fn validate(document: &Value) -> ValidationReport {
    if !document.is_object() {
        return ValidationReport::error_envelope("Input must be a JSON object");
    }

    let detected = detect_sections(document);
    let info = extract_basic_info(document);

    let mut validated: Vec<(String, SectionOutcome)> = Vec::new();
    let mut fail_count = 0usize;
    for &section in CORE_SECTIONS {
        let found = detected.iter().find(|(name, _)| *name == section).map(|(_, value)| *value);
        let report = match found {
            Some(value) if is_null_or_empty(value) => SectionReport::empty_section(section),
            Some(value) => run_section(section, value),
            // The detector drops empty containers; a re-probe tells a
            // located-but-empty section apart from a truly absent one.
            None => match find_field(document, category_aliases(section)) {
                Some(_) => SectionReport::empty_section(section),
                None => SectionReport::not_found(),
            },
        };
        if matches!(report.status, SectionStatus::Fail | SectionStatus::Error) {
            fail_count += 1;
        }
        validated.push((section.to_string(), SectionOutcome::Entries(report)));
    }

    validated.push((
        "links".to_string(),
        SectionOutcome::Checks(CheckReport::from_issues(validate_links(document))),
    ));
    validated.push((
        "basic_info".to_string(),
        SectionOutcome::Checks(CheckReport::from_issues(check_basic_info(&info))),
    ));

    let detected_sections: Vec<String> = detected
        .iter()
        .filter(|(name, _)| !CORE_SECTIONS.contains(name))
        .map(|(name, _)| name.to_string())
        .collect();

    let validation_status = if fail_count == 0 {
        ValidationStatus::Structured
    } else if fail_count < CORE_SECTIONS.len() {
        ValidationStatus::PartiallyStructured
    } else {
        ValidationStatus::NotStructured
    };

    ValidationReport {
        candidate_id: info.candidate_id,
        name: info.name,
        email: info.email,
        phone: info.phone,
        validation_status,
        error: None,
        validated_sections: validated,
        detected_sections,
    }
}

fn run_section(section: &str, value: &Value) -> SectionReport {
    match section {
        "experience" => validate_experience(value),
        "education" => validate_education(value),
        "projects" => validate_projects(value),
        "certifications" => validate_certifications(value),
        // CORE_SECTIONS only names the four arms above.
        _ => unreachable!("not a core section: {section}"),
    }
}

/// Validates a batch of documents, preserving input order. Each document is
/// independent; an unprocessable one reports `ERROR` without affecting its
/// siblings.
pub fn validate_batch(documents: &[Value]) -> Vec<ValidationReport> {
    documents.iter().map(validate).collect()
}
