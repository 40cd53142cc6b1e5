//! Entry validation rules for the four core sections.
//!
//! Each validator first coerces its detected value into an ordered sequence
//! of entries (a list, a single object, or a map-of-entries), then checks
//! every entry independently and reports 1-based entry numbers against the
//! original sequence. Nothing here errors: malformed entries fail with
//! issue strings.

use crate::locate::{extract_text, find_entry_field};
use crate::primitives::{
    calculate_days, is_null_or_empty, is_null_or_empty_str, is_truthy, validate_date,
    validate_fraction_grade, validate_percentage, validate_url, value_to_string,
};
use crate::report::{EntryResult, SectionReport};
use crate::taxonomy::{
    CERT_ISSUER_ALIASES, CERT_NAME_ALIASES, CERT_URL_ALIASES, EDUCATION_DEGREE_ALIASES,
    EDUCATION_END_ALIASES, EDUCATION_GRADE_ALIASES, EDUCATION_INSTITUTION_ALIASES,
    EDUCATION_START_ALIASES, EXPERIENCE_COMPANY_ALIASES, EXPERIENCE_DESCRIPTION_ALIASES,
    EXPERIENCE_END_ALIASES, EXPERIENCE_HIGHLIGHT_ALIASES, EXPERIENCE_START_ALIASES,
    EXPERIENCE_TITLE_ALIASES, ONGOING_MARKERS, PROJECT_DESCRIPTION_ALIASES, PROJECT_LINK_ALIASES,
    PROJECT_NAME_ALIASES, PROJECT_NESTED_LINK_ALIASES, PROJECT_POINT_ALIASES, PROJECT_TECH_ALIASES,
    TECH_KEYWORDS,
};
use serde_json::{Value, json};

// ─── Experience ─────────────────────────────────────────────────────────────

/// Validates a detected experience section.
pub fn validate_experience(section: &Value) -> SectionReport {
    if !is_truthy(section) {
        return SectionReport::not_found();
    }
    let entries: Vec<&Value> = match section {
        Value::Object(map) => map.values().filter(|v| v.is_object()).collect(),
        Value::Array(items) => items.iter().collect(),
        _ => return SectionReport::invalid_format(),
    };
    let results = entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| EntryResult::new(idx + 1, experience_entry_issues(entry)))
        .collect();
    SectionReport::from_entries(results)
}

fn experience_entry_issues(entry: &Value) -> Vec<String> {
    let mut issues = Vec::new();
    if is_null_or_empty(entry) || !entry.is_object() {
        issues.push("Invalid or empty experience entry".to_string());
        return issues;
    }

    let start = field_text(entry, EXPERIENCE_START_ALIASES);
    let end = field_text(entry, EXPERIENCE_END_ALIASES);
    check_date_range(start.as_deref(), end.as_deref(), &mut issues);

    let title = find_entry_field(entry, EXPERIENCE_TITLE_ALIASES).filter(|v| is_truthy(v));
    let company = find_entry_field(entry, EXPERIENCE_COMPANY_ALIASES).filter(|v| is_truthy(v));

    // Description falls back to flattened highlights/responsibilities.
    let raw_desc = find_entry_field(entry, EXPERIENCE_DESCRIPTION_ALIASES).filter(|v| is_truthy(v));
    let desc_text: Option<String> = match raw_desc {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => None, // truthy non-string description: present, no length rule
        None => find_entry_field(entry, EXPERIENCE_HIGHLIGHT_ALIASES)
            .filter(|v| is_truthy(v))
            .map(extract_text),
    };
    let has_description = raw_desc.is_some() || desc_text.as_ref().is_some_and(|s| !s.is_empty());

    if title.is_none() && company.is_none() && !has_description {
        issues.push("Insufficient experience details".to_string());
    } else if let Some(text) = &desc_text
        && !text.is_empty()
        && text.trim().chars().count() < 5
    {
        issues.push("Description too short".to_string());
    }
    issues
}

// ─── Education ──────────────────────────────────────────────────────────────

/// Validates a detected education section.
pub fn validate_education(section: &Value) -> SectionReport {
    if !is_truthy(section) {
        return SectionReport::not_found();
    }
    let entries: Vec<&Value> = match section {
        Value::Object(map) => {
            let mut list = Vec::new();
            for child in map.values() {
                match child {
                    Value::Object(_) => list.push(child),
                    Value::Array(items) => list.extend(items.iter().filter(|v| v.is_object())),
                    _ => {}
                }
            }
            list
        }
        Value::Array(items) => items.iter().collect(),
        _ => return SectionReport::invalid_format(),
    };
    if entries.is_empty() {
        return SectionReport::not_found();
    }
    let results = entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| EntryResult::new(idx + 1, education_entry_issues(entry)))
        .collect();
    SectionReport::from_entries(results)
}

fn education_entry_issues(entry: &Value) -> Vec<String> {
    let mut issues = Vec::new();
    if is_null_or_empty(entry) || !entry.is_object() {
        issues.push("Invalid or empty education entry".to_string());
        return issues;
    }

    check_grade(entry, &mut issues);

    let start = field_text(entry, EDUCATION_START_ALIASES);
    let end = field_text(entry, EDUCATION_END_ALIASES);
    check_date_range(start.as_deref(), end.as_deref(), &mut issues);

    let degree = find_entry_field(entry, EDUCATION_DEGREE_ALIASES).filter(|v| is_truthy(v));
    let institution =
        find_entry_field(entry, EDUCATION_INSTITUTION_ALIASES).filter(|v| is_truthy(v));
    if degree.is_none() && institution.is_none() {
        issues.push("Insufficient education details".to_string());
    }
    issues
}

/// Grade semantics keyed off the spelling: `%` means percentage, `gpa` or a
/// slash means fraction, a bare number is read on the 10-point scale when
/// it fits and the 100-point scale otherwise. Non-numeric grades ("A+",
/// "First Class") are outside the numeric rules and accepted as-is.
fn check_grade(entry: &Value, issues: &mut Vec<String>) {
    let Some(grade) = find_entry_field(entry, EDUCATION_GRADE_ALIASES)
        .filter(|v| is_truthy(v) && !is_null_or_empty(v))
    else {
        return;
    };
    let display = value_to_string(grade);
    let grade_str = display.trim().to_lowercase();
    if grade_str.contains('%') {
        if !validate_percentage(&grade_str) {
            issues.push(format!("Invalid percentage: {display}"));
        }
    } else if grade_str.contains("gpa") || grade_str.contains('/') {
        if !validate_fraction_grade(&grade_str) {
            issues.push(format!("Invalid CGPA: {display}"));
        }
    } else if let Ok(num) = grade_str.parse::<f64>() {
        let in_range = if num > 10.0 {
            (0.0..=100.0).contains(&num)
        } else {
            (0.0..=10.0).contains(&num)
        };
        if !in_range {
            issues.push(format!("Invalid grade value: {display}"));
        }
    }
}

// ─── Projects ───────────────────────────────────────────────────────────────

/// Validates a detected projects section.
pub fn validate_projects(section: &Value) -> SectionReport {
    if !is_truthy(section) {
        return SectionReport::not_found();
    }
    let entries: Vec<&Value> = match section {
        Value::Object(map) => map.values().filter(|v| v.is_object()).collect(),
        Value::Array(items) => items.iter().collect(),
        _ => return SectionReport::invalid_format(),
    };
    let results = entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| EntryResult::new(idx + 1, project_entry_issues(entry)))
        .collect();
    SectionReport::from_entries(results)
}

fn project_entry_issues(entry: &Value) -> Vec<String> {
    let mut issues = Vec::new();
    if is_null_or_empty(entry) {
        issues.push("Entry is empty or null".to_string());
        return issues;
    }
    if !entry.is_object() {
        issues.push("Invalid format - expected object".to_string());
        return issues;
    }

    if find_entry_field(entry, PROJECT_NAME_ALIASES).is_none_or(is_null_or_empty) {
        issues.push("Missing or null name".to_string());
    }

    // Description: bullet points first, description-like fields second.
    let points_text = join_string_items(find_entry_field(entry, PROJECT_POINT_ALIASES));
    let mut desc_text: Option<String> = None;
    let mut desc_value: Option<&Value> = None;
    if points_text.is_empty() {
        match find_entry_field(entry, PROJECT_DESCRIPTION_ALIASES) {
            Some(Value::Array(items)) => {
                desc_text = Some(
                    items
                        .iter()
                        .filter(|v| is_truthy(v))
                        .map(value_to_string)
                        .collect::<Vec<_>>()
                        .join(" "),
                );
            }
            Some(Value::String(s)) => desc_text = Some(s.clone()),
            Some(other) => desc_value = Some(other),
            None => {}
        }
    } else {
        desc_text = Some(points_text.clone());
    }
    let missing_description = match (&desc_text, desc_value) {
        (Some(text), _) => is_null_or_empty_str(text),
        (None, Some(value)) => is_null_or_empty(value),
        (None, None) => true,
    };
    if missing_description {
        issues.push("Missing description".to_string());
    } else if let Some(text) = &desc_text
        && text.trim().chars().count() < 10
    {
        issues.push("Description too short (min 10 chars)".to_string());
    }

    // Technology signals: explicit field, keyword scan, or a valid link.
    let mut combined = points_text;
    if let Some(text) = &desc_text {
        combined.push(' ');
        combined.push_str(text);
    }
    let combined_lower = combined.to_lowercase();
    let has_keyword = TECH_KEYWORDS.iter().any(|keyword| combined_lower.contains(keyword));
    let has_tech = find_entry_field(entry, PROJECT_TECH_ALIASES).is_some_and(|v| is_truthy(v));

    let mut link = find_entry_field(entry, PROJECT_LINK_ALIASES);
    if let Some(value) = link
        && value.is_object()
    {
        link = find_entry_field(value, PROJECT_NESTED_LINK_ALIASES);
    }
    let mut link_valid = true;
    match link {
        Some(value) if is_truthy(value) && !is_null_or_empty(value) => match value {
            Value::String(s) => {
                if !validate_url(s) {
                    issues.push(format!("Invalid URL format: {s}"));
                    link_valid = false;
                }
            }
            other => {
                issues.push(format!("Invalid link format: {}", value_to_string(other)));
                link_valid = false;
            }
        },
        _ => link_valid = false,
    }

    if !has_tech && !has_keyword && !link_valid {
        issues.push("Missing technologies".to_string());
    }
    issues
}

/// Space-joins the string members of a points-style value; other shapes
/// join to empty.
fn join_string_items(value: Option<&Value>) -> String {
    match value {
        Some(Value::Object(map)) => {
            map.values().filter_map(Value::as_str).collect::<Vec<_>>().join(" ")
        }
        Some(Value::Array(items)) => {
            items.iter().filter_map(Value::as_str).collect::<Vec<_>>().join(" ")
        }
        _ => String::new(),
    }
}

// ─── Certifications ─────────────────────────────────────────────────────────

/// Validates a detected certifications section. Accepts a list, a grouping
/// object (values may be nested objects, lists, or bare strings), or a
/// single bare string.
pub fn validate_certifications(section: &Value) -> SectionReport {
    if !is_truthy(section) {
        return SectionReport::not_found();
    }
    let entries: Vec<Value> = match section {
        Value::Object(map) => {
            let mut list = Vec::new();
            for child in map.values() {
                match child {
                    Value::Object(_) => list.push(child.clone()),
                    Value::Array(items) => list.extend(items.iter().cloned()),
                    Value::String(s) => list.push(json!({ "name": s })),
                    _ => {}
                }
            }
            list
        }
        Value::String(s) => vec![json!({ "name": s })],
        Value::Array(items) => items.to_vec(),
        _ => return SectionReport::invalid_format(),
    };
    let results = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| EntryResult::new(idx + 1, certification_entry_issues(entry)))
        .collect();
    SectionReport::from_entries(results)
}

fn certification_entry_issues(entry: &Value) -> Vec<String> {
    // A bare string is shorthand for a named certification.
    let named;
    let entry = match entry {
        Value::String(s) => {
            named = json!({ "name": s });
            &named
        }
        other => other,
    };
    let mut issues = Vec::new();
    if is_null_or_empty(entry) || !entry.is_object() {
        issues.push("Invalid or empty certification entry".to_string());
        return issues;
    }

    let name = find_entry_field(entry, CERT_NAME_ALIASES).filter(|v| is_truthy(v));
    let issuer = find_entry_field(entry, CERT_ISSUER_ALIASES).filter(|v| is_truthy(v));
    if name.is_none() && issuer.is_none() {
        issues.push("Insufficient certification details".to_string());
    }

    if let Some(url) = find_entry_field(entry, CERT_URL_ALIASES)
        && is_truthy(url)
        && !is_null_or_empty(url)
    {
        match url {
            Value::String(s) => {
                if !validate_url(s) {
                    issues.push(format!("Invalid verification URL: {s}"));
                }
            }
            other => issues.push(format!("Invalid URL format: {}", value_to_string(other))),
        }
    }
    issues
}

// ─── Shared helpers ─────────────────────────────────────────────────────────

/// Stringified field value, absent when the field is missing or falsy.
fn field_text(entry: &Value, aliases: &[&str]) -> Option<String> {
    find_entry_field(entry, aliases).filter(|v| is_truthy(v)).map(value_to_string)
}

/// Start must parse if present. A finished end date must parse and may not
/// precede the start; ongoing markers ("present", "now") skip both checks.
fn check_date_range(start: Option<&str>, end: Option<&str>, issues: &mut Vec<String>) {
    if let Some(start) = start
        && !validate_date(start)
    {
        issues.push(format!("Invalid start date format: {start}"));
    }
    if let Some(end) = end
        && !ONGOING_MARKERS.contains(&end.to_lowercase().as_str())
    {
        if !validate_date(end) {
            issues.push(format!("Invalid end date format: {end}"));
        } else if let Some(start) = start
            && validate_date(start)
            && calculate_days(start, end) < 0
        {
            issues.push("End date before start date".to_string());
        }
    }
}
