//! Document-wide hyperlink checks.
//!
//! Two passes over the document: a sweep of every URL-like string leaf,
//! then targeted probes of well-known profile fields (github, linkedin,
//! portfolio and friends). Each distinct URL is reported at most once.

use crate::locate::{find_all_links, find_field};
use crate::primitives::validate_url;
use crate::taxonomy::PROFILE_FIELDS;
use serde_json::Value;
use std::collections::HashSet;

/// Checks every link in the document, returning one issue per distinct
/// invalid URL.
pub fn validate_links(document: &Value) -> Vec<String> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (field, raw) in find_all_links(document) {
        let Some(url) = normalize_url(&raw) else {
            continue;
        };
        if seen.insert(url.clone()) && !validate_url(&url) {
            issues.push(format!("Invalid URL in '{field}': {url}"));
        }
    }

    for field in PROFILE_FIELDS {
        let aliases = [
            field.to_string(),
            format!("{field}_profile"),
            format!("{field}_url"),
            format!("{field}_link"),
            format!("{field}Url"),
            format!("{field}Link"),
        ];
        let Some(found) = find_field(document, &aliases) else {
            continue;
        };
        let candidates: Vec<&Value> = match found {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        };
        for candidate in candidates {
            if let Value::String(raw) = candidate
                && let Some(url) = normalize_url(raw)
                && seen.insert(url.clone())
                && !validate_url(&url)
            {
                issues.push(format!("Invalid {field} URL: {url}"));
            }
        }
    }

    issues
}

/// Trims and completes a bare domain with an https scheme. Whitespace-only
/// input normalizes to nothing.
fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") && trimmed.contains('.')
    {
        return Some(format!("https://{trimmed}"));
    }
    Some(trimmed.to_string())
}
