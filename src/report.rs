//! Report types produced by validation.
//!
//! Serialization matches the external JSON contract: statuses render in
//! SCREAMING_SNAKE_CASE and `validated_sections` serializes as an ordered
//! map keyed by section name.

use serde::{Serialize, Serializer};

/// Sentinel for identity fields that could not be located.
pub const UNKNOWN: &str = "unknown";

/// Document-level classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Structured,
    PartiallyStructured,
    NotStructured,
    Error,
}

/// Outcome of one core section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionStatus {
    NotFound,
    Pass,
    Fail,
    Error,
}

/// Outcome of a single entry, or of an auxiliary check report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// One validated entry within a section. `entry_number` is the 1-based
/// position in the original detected sequence, malformed entries included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryResult {
    pub entry_number: usize,
    pub status: CheckStatus,
    pub issues: Vec<String>,
}

impl EntryResult {
    pub(crate) fn new(entry_number: usize, issues: Vec<String>) -> Self {
        let status = if issues.is_empty() { CheckStatus::Pass } else { CheckStatus::Fail };
        EntryResult { entry_number, status, issues }
    }
}

/// Per-section report for the four core sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub status: SectionStatus,
    pub entries: Vec<EntryResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub section_issues: Vec<String>,
}

impl SectionReport {
    /// The section key was never located.
    pub fn not_found() -> Self {
        SectionReport { status: SectionStatus::NotFound, entries: Vec::new(), section_issues: Vec::new() }
    }

    /// Input present but not coercible to a sequence of entries.
    pub fn invalid_format() -> Self {
        SectionReport {
            status: SectionStatus::Fail,
            entries: vec![EntryResult::new(1, vec!["Invalid format - expected list".to_string()])],
            section_issues: Vec::new(),
        }
    }

    /// Section located but holding an empty value.
    pub fn empty_section(name: &str) -> Self {
        SectionReport {
            status: SectionStatus::Fail,
            entries: Vec::new(),
            section_issues: vec![format!("{} section is empty", capitalize(name))],
        }
    }

    /// PASS only when every entry individually passed.
    pub fn from_entries(entries: Vec<EntryResult>) -> Self {
        let status = if entries.iter().all(|e| e.status == CheckStatus::Pass) {
            SectionStatus::Pass
        } else {
            SectionStatus::Fail
        };
        SectionReport { status, entries, section_issues: Vec::new() }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Report for the auxiliary `links` and `basic_info` entries, which carry
/// flat issue lists instead of numbered entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub issues: Vec<String>,
}

impl CheckReport {
    pub fn from_issues(issues: Vec<String>) -> Self {
        let status = if issues.is_empty() { CheckStatus::Pass } else { CheckStatus::Fail };
        CheckReport { status, issues }
    }
}

/// Either kind of per-section report under `validated_sections`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionOutcome {
    Entries(SectionReport),
    Checks(CheckReport),
}

/// The root result of validating one document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationReport {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub validation_status: ValidationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(serialize_with = "serialize_section_map")]
    pub validated_sections: Vec<(String, SectionOutcome)>,
    pub detected_sections: Vec<String>,
}

impl ValidationReport {
    /// Envelope for documents the pipeline could not process at all.
    pub(crate) fn error_envelope(message: &str) -> Self {
        ValidationReport {
            candidate_id: UNKNOWN.to_string(),
            name: UNKNOWN.to_string(),
            email: UNKNOWN.to_string(),
            phone: UNKNOWN.to_string(),
            validation_status: ValidationStatus::Error,
            error: Some(message.to_string()),
            validated_sections: Vec::new(),
            detected_sections: Vec::new(),
        }
    }

    /// The report for one named section, if present.
    pub fn section(&self, name: &str) -> Option<&SectionOutcome> {
        self.validated_sections
            .iter()
            .find(|(section, _)| section == name)
            .map(|(_, outcome)| outcome)
    }
}

/// Insertion-ordered map serialization for `validated_sections`.
fn serialize_section_map<S: Serializer>(
    sections: &[(String, SectionOutcome)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(sections.len()))?;
    for (name, outcome) in sections {
        map.serialize_entry(name, outcome)?;
    }
    map.end()
}
