//! Section detection over the whole document.

use crate::locate::find_field;
use crate::primitives::is_truthy;
use crate::taxonomy::SECTION_TAXONOMY;
use serde_json::Value;

/// Runs the field locator once per taxonomy category and keeps every
/// non-empty hit, in taxonomy order. Empty arrays and objects are dropped
/// here; the orchestrator re-probes core sections so a located-but-empty
/// one still reports as present. Other falsy values (empty strings, zero)
/// stay detected.
pub fn detect_sections(document: &Value) -> Vec<(&'static str, &Value)> {
    let mut detected = Vec::new();
    for category in SECTION_TAXONOMY {
        if let Some(value) = find_field(document, category.aliases) {
            match value {
                Value::Array(_) | Value::Object(_) if !is_truthy(value) => continue,
                _ => detected.push((category.name, value)),
            }
        }
    }
    detected
}
