//! Candidate identity extraction.
//!
//! Pulls id, name, email, and phone out of the document using prioritized
//! alias chains. A located contact-style object is inspected first with a
//! fixed set of exact key names (including common misspellings); the whole
//! document is the fallback with broader alias lists. Fields that cannot
//! be located keep the `"unknown"` sentinel.

use crate::locate::find_field;
use crate::primitives::{
    is_null_or_empty, is_truthy, validate_email, validate_phone, value_to_string,
};
use crate::report::UNKNOWN;
use crate::taxonomy::{
    CONTACT_ALIASES, CONTACT_EMAIL_KEYS, CONTACT_PHONE_KEYS, EMAIL_ALIASES, FIRST_NAME_ALIASES,
    ID_ALIASES, LAST_NAME_ALIASES, NAME_ALIASES, PHONE_ALIASES,
};
use serde_json::Value;

/// Identity fields for one document. Validity flags are only true when the
/// located value passed the corresponding format check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicInfo {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub email_valid: bool,
    pub phone_valid: bool,
}

impl Default for BasicInfo {
    fn default() -> Self {
        BasicInfo {
            candidate_id: UNKNOWN.to_string(),
            name: UNKNOWN.to_string(),
            email: UNKNOWN.to_string(),
            phone: UNKNOWN.to_string(),
            email_valid: false,
            phone_valid: false,
        }
    }
}

/// Extracts [`BasicInfo`] from an arbitrary resume document.
pub fn extract_basic_info(document: &Value) -> BasicInfo {
    let mut info = BasicInfo::default();

    if let Some(found) = find_field(document, ID_ALIASES)
        && !is_null_or_empty(found)
    {
        info.candidate_id = value_to_string(found);
    }

    if let Some(found) = find_field(document, NAME_ALIASES)
        && is_truthy(found)
        && !is_null_or_empty(found)
    {
        info.name = value_to_string(found);
    }

    if let Some(contact) = find_field(document, CONTACT_ALIASES)
        && let Value::Object(contact_map) = contact
        && !contact_map.is_empty()
    {
        if let Some(email) = extract_email_from_object(contact) {
            info.email_valid = validate_email(&email);
            info.email = email;
        }
        if let Some(phone) = extract_phone_from_object(contact) {
            info.phone_valid = validate_phone(&phone);
            info.phone = phone;
        }
        // Name aliases probed by exact key inside the contact object, in
        // alias priority order.
        if info.name == UNKNOWN {
            for alias in NAME_ALIASES {
                if let Some(value) = contact_map.get(*alias)
                    && !is_null_or_empty(value)
                {
                    info.name = value_to_string(value);
                    break;
                }
            }
        }
    }

    if info.email == UNKNOWN {
        fallback_email(document, &mut info);
    }
    if info.phone == UNKNOWN {
        fallback_phone(document, &mut info);
    }

    // Last resort for the name: compose from separately located parts.
    if info.name == UNKNOWN {
        let first = find_field(document, FIRST_NAME_ALIASES);
        let last = find_field(document, LAST_NAME_ALIASES);
        if let (Some(first), Some(last)) = (first, last)
            && is_truthy(first)
            && is_truthy(last)
            && !is_null_or_empty(first)
            && !is_null_or_empty(last)
        {
            info.name = format!("{} {}", value_to_string(first), value_to_string(last));
        }
    }

    info
}

/// Document-wide email fallback: first syntactically valid list element
/// wins, else the first element with its actual validity recorded.
fn fallback_email(document: &Value, info: &mut BasicInfo) {
    let Some(found) = find_field(document, EMAIL_ALIASES) else {
        return;
    };
    if !is_truthy(found) {
        return;
    }
    match found {
        Value::Array(items) => {
            for item in items {
                if let Value::String(s) = item
                    && validate_email(s)
                {
                    info.email = s.clone();
                    info.email_valid = true;
                    return;
                }
            }
            if let Some(first) = items.first() {
                let candidate = value_to_string(first);
                info.email_valid = validate_email(&candidate);
                info.email = candidate;
            }
        }
        Value::String(s) => {
            info.email_valid = validate_email(s);
            info.email = s.clone();
        }
        _ => {}
    }
}

/// Document-wide phone fallback. Unlike email, an all-invalid list leaves
/// the sentinel in place.
fn fallback_phone(document: &Value, info: &mut BasicInfo) {
    let Some(found) = find_field(document, PHONE_ALIASES) else {
        return;
    };
    if !is_truthy(found) {
        return;
    }
    match found {
        Value::Array(items) => {
            for item in items {
                let candidate = match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) if !n.is_f64() => Some(n.to_string()),
                    _ => None,
                };
                if let Some(candidate) = candidate
                    && validate_phone(&candidate)
                {
                    info.phone = candidate;
                    info.phone_valid = true;
                    return;
                }
            }
        }
        Value::String(_) | Value::Number(_) => {
            let candidate = value_to_string(found);
            info.phone_valid = validate_phone(&candidate);
            info.phone = candidate;
        }
        _ => {}
    }
}

// ─── Contact-object inspection ──────────────────────────────────────────────

/// Probes the fixed email key names, accepting the first syntactically
/// valid string (scalar or list element), then recurses into nested values.
fn extract_email_from_object(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => {
            for key in CONTACT_EMAIL_KEYS {
                match map.get(*key) {
                    Some(Value::String(s)) if validate_email(s) => return Some(s.clone()),
                    Some(Value::Array(items)) => {
                        for item in items {
                            if let Value::String(s) = item
                                && validate_email(s)
                            {
                                return Some(s.clone());
                            }
                        }
                    }
                    _ => {}
                }
            }
            map.values().find_map(extract_email_from_object)
        }
        Value::Array(items) => items.iter().find_map(extract_email_from_object),
        _ => None,
    }
}

/// Phone counterpart of [`extract_email_from_object`]. Bare string list
/// items are also accepted directly.
fn extract_phone_from_object(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => {
            for key in CONTACT_PHONE_KEYS {
                match map.get(*key) {
                    Some(Value::String(s)) if validate_phone(s) => return Some(s.clone()),
                    Some(Value::Array(items)) => {
                        for item in items {
                            if let Value::String(s) = item
                                && validate_phone(s)
                            {
                                return Some(s.clone());
                            }
                        }
                    }
                    _ => {}
                }
            }
            map.values().find_map(extract_phone_from_object)
        }
        Value::Array(items) => {
            for item in items {
                if let Value::String(s) = item
                    && validate_phone(s)
                {
                    return Some(s.clone());
                }
                if let Some(found) = extract_phone_from_object(item) {
                    return Some(found);
                }
            }
            None
        }
        _ => None,
    }
}

// ─── Identity format rules ──────────────────────────────────────────────────

/// Format rules over extracted identity, contributing the `basic_info`
/// entry of the report. Sentinel fields are skipped.
pub fn check_basic_info(info: &BasicInfo) -> Vec<String> {
    let mut issues = Vec::new();
    if info.email != UNKNOWN && !validate_email(&info.email) {
        issues.push(format!("Invalid email format: {}", info.email));
    }
    if info.phone != UNKNOWN && !validate_phone(&info.phone) {
        issues.push(format!("Invalid phone number format: {}", info.phone));
    }
    if info.name != UNKNOWN && info.name.trim().chars().count() < 2 {
        issues.push("Invalid name format".to_string());
    }
    issues
}
