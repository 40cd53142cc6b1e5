//! Schema-agnostic field location over arbitrary JSON trees.
//!
//! Producers spell the same logical field many ways ("company", "employer",
//! "org") and nest sections at arbitrary depths. The locator walks the
//! document depth-first, matching normalized key spellings against alias
//! sets, and returns the first hit. JSON values are acyclic, so traversal
//! is bounded by tree depth.

use crate::primitives::{is_truthy, value_to_string};
use crate::taxonomy::LINK_KEYWORDS;
use serde_json::Value;

// ─── Key normalization ──────────────────────────────────────────────────────

/// Canonical spelling: lower-case with spaces and hyphens as underscores.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase().replace([' ', '-'], "_")
}

/// True when the normalized key equals a normalized pattern, or carries it
/// as a `pattern_` prefix or `_pattern` suffix (compound keys like
/// "work_experience_section").
pub fn key_matches<S: AsRef<str>>(key: &str, patterns: &[S]) -> bool {
    let normalized = normalize_key(key);
    patterns.iter().any(|pattern| {
        let p = normalize_key(pattern.as_ref());
        normalized == p
            || normalized.starts_with(&format!("{p}_"))
            || normalized.ends_with(&format!("_{p}"))
    })
}

// ─── Field location ─────────────────────────────────────────────────────────

/// Finds the first value whose key matches any alias.
///
/// Objects are scanned key-order-first (alias order only breaks ties within
/// a single key), then descended into depth-first; arrays are searched
/// element-wise in order. A matching key holding JSON null counts as
/// absent and ends the scan of its object.
pub fn find_field<'a, S: AsRef<str>>(value: &'a Value, aliases: &[S]) -> Option<&'a Value> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key_matches(key, aliases) {
                    return if child.is_null() { None } else { Some(child) };
                }
            }
            map.values().find_map(|child| find_field(child, aliases))
        }
        Value::Array(items) => items.iter().find_map(|item| find_field(item, aliases)),
        _ => None,
    }
}

/// Entry-level variant of [`find_field`]: exact case-insensitive key
/// equality, no affix matching. Used inside individual section entries
/// where alias lists already enumerate the compound spellings. A direct
/// key hit returns its value as-is (null included); null results from
/// nested levels are skipped and the scan continues.
pub fn find_entry_field<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Value> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if names.iter().any(|name| key.eq_ignore_ascii_case(name)) {
                    return Some(child);
                }
            }
            map.values()
                .find_map(|child| find_entry_field(child, names).filter(|v| !v.is_null()))
        }
        Value::Array(items) => items
            .iter()
            .find_map(|item| find_entry_field(item, names).filter(|v| !v.is_null())),
        _ => None,
    }
}

// ─── Link harvesting ────────────────────────────────────────────────────────

/// Collects every URL-like string leaf as `(source_key, url)` pairs, in
/// depth-first document order. Array items report under the placeholder
/// key `"list_item"`.
pub fn find_all_links(value: &Value) -> Vec<(String, String)> {
    let mut links = Vec::new();
    collect_links(value, &mut links);
    links
}

fn collect_links(value: &Value, links: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                match child {
                    Value::String(s) => {
                        if looks_like_link(s) {
                            links.push((key.clone(), s.clone()));
                        }
                    }
                    _ => collect_links(child, links),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(s) => {
                        if looks_like_link(s) {
                            links.push(("list_item".to_string(), s.clone()));
                        }
                    }
                    _ => collect_links(item, links),
                }
            }
        }
        _ => {}
    }
}

fn looks_like_link(s: &str) -> bool {
    let lower = s.to_lowercase();
    LINK_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

// ─── Text flattening ────────────────────────────────────────────────────────

/// Flattens a highlights-style value into one space-joined string: string
/// values of an object, stringified truthy items of an array, or the string
/// itself. Anything else flattens to empty.
pub fn extract_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let mut parts: Vec<String> = Vec::new();
            for child in map.values() {
                match child {
                    Value::String(s) => parts.push(s.clone()),
                    Value::Array(items) => {
                        parts.extend(items.iter().filter(|v| is_truthy(v)).map(value_to_string));
                    }
                    _ => {}
                }
            }
            parts.join(" ")
        }
        Value::Array(items) => items
            .iter()
            .filter(|v| is_truthy(v))
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}
