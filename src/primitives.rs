//! Total primitive validators shared across the pipeline.
//!
//! Every function here is total: malformed input yields `false`, `0`, or
//! `None`, never an error. Rule validators accumulate issue strings on top
//! of these checks instead of propagating failures.

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z]{2,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    ).unwrap()
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+\.?\d*)\s*%?\s*$").unwrap());

static FRACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.?\d*)\s*/\s*(\d+\.?\d*)").unwrap()
});

static BARE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+\.?\d*)\s*$").unwrap());

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());

// ─── Dates ──────────────────────────────────────────────────────────────────

/// Day-precision date formats, tried in order.
const DAY_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%m-%d-%Y", "%Y/%m/%d", "%d %b %Y",
    "%d %B %Y", "%b %d, %Y", "%B %d, %Y", "%Y.%m.%d", "%d.%m.%Y",
];

/// Parses a date string against the fixed pattern table.
///
/// Month-precision forms (`2021-03`, `Mar 2021`) are completed to the first
/// of the month; a bare four-digit year becomes January 1st. Returns `None`
/// for anything else, including the literal strings "null" and "none".
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if is_null_or_empty_str(s) {
        return None;
    }
    for fmt in DAY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    // Month precision: complete to the first of the month.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{s}-1"), "%Y-%m-%d") {
        return Some(date);
    }
    for fmt in ["%d %b %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {s}"), fmt) {
            return Some(date);
        }
    }
    // Year precision.
    if YEAR_RE.is_match(s) {
        return s
            .parse::<i32>()
            .ok()
            .filter(|y| *y >= 1)
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));
    }
    None
}

/// True if the string parses under any supported date pattern.
pub fn validate_date(input: &str) -> bool {
    parse_date(input).is_some()
}

/// Day difference `end - start`. Returns 0 when either side fails to parse.
pub fn calculate_days(start: &str, end: &str) -> i64 {
    match (parse_date(start), parse_date(end)) {
        (Some(s), Some(e)) => (e - s).num_days(),
        _ => 0,
    }
}

// ─── Format checks ──────────────────────────────────────────────────────────

/// URL grammar: optional scheme and `www.`, host with a 2–6 letter TLD,
/// optional path/query. Case-insensitive.
pub fn validate_url(url: &str) -> bool {
    let url = url.trim();
    !is_null_or_empty_str(url) && URL_RE.is_match(url)
}

/// Standard `local@domain.tld` email shape.
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();
    !is_null_or_empty_str(email) && EMAIL_RE.is_match(email)
}

/// Valid when the digit count after stripping separators is 10–13.
pub fn validate_phone(phone: &str) -> bool {
    let phone = phone.trim();
    if is_null_or_empty_str(phone) {
        return false;
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=13).contains(&digits)
}

/// A percentage grade: bare number with optional `%`, in `[0, 100]`.
pub fn validate_percentage(value: &str) -> bool {
    PERCENT_RE
        .captures(value)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .is_some_and(|num| (0.0..=100.0).contains(&num))
}

/// A fraction grade like `8.5/10`. Scale follows the denominator: `/10`
/// and `/4` use their conventional ranges, anything else caps at the
/// denominator itself. A bare number is accepted on the 10-point scale.
pub fn validate_fraction_grade(value: &str) -> bool {
    if let Some(caps) = FRACTION_RE.captures(value) {
        let (Ok(num), Ok(denom)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) else {
            return false;
        };
        let max = if denom == 4.0 { 4.0 } else if denom == 10.0 { 10.0 } else { denom };
        return (0.0..=max).contains(&num);
    }
    BARE_NUMBER_RE
        .captures(value)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .is_some_and(|num| (0.0..=10.0).contains(&num))
}

// ─── Emptiness and coercion ─────────────────────────────────────────────────

/// Blank, or a literal "null"/"none" spelling (case-insensitive).
pub fn is_null_or_empty_str(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.eq_ignore_ascii_case("null") || t.eq_ignore_ascii_case("none")
}

/// Absent-equivalent values: JSON null, blank or literal "null"/"none"
/// strings, empty arrays and objects.
pub fn is_null_or_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => is_null_or_empty_str(s),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Truthiness of a JSON value: null, false, zero, and empty strings or
/// containers are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Scalars render naturally; objects and arrays fall back to compact JSON.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
