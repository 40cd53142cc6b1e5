//! Schema-agnostic structural validator for resume documents in JSON.
//!
//! Resume JSON in the wild has no fixed schema: producers rename keys
//! ("experience" vs "work_history"), nest sections at arbitrary depths,
//! and mix scalars, lists, and objects for the same logical field. This
//! crate locates sections and identity fields through alias-driven
//! recursive search, applies per-section content rules, and aggregates
//! everything into one structured report:
//!
//! ```text
//! check(json) → Value → validate(doc) → ValidationReport
//!                       detect_sections(doc) / extract_basic_info(doc)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! let document = serde_json::json!({
//!     "name": "Ada Lovelace",
//!     "email": "ada@example.com",
//!     "experience": [{
//!         "title": "Analyst",
//!         "company": "Analytical Engines Ltd",
//!         "start_date": "1842-01",
//!         "end_date": "present"
//!     }],
//!     "education": [{
//!         "degree": "Mathematics",
//!         "institution": "Home tutoring",
//!         "grade": "92%"
//!     }],
//!     "projects": [{
//!         "name": "Notes on the Analytical Engine",
//!         "description": "First published algorithm, written in python pseudocode",
//!         "technologies": ["python"]
//!     }],
//!     "certifications": ["Royal Society commendation"]
//! });
//!
//! let report = resumecheck::validate(&document);
//! assert_eq!(report.name, "Ada Lovelace");
//! assert_eq!(report.validation_status, resumecheck::ValidationStatus::Structured);
//! ```

pub mod basic_info;
pub mod detect;
pub mod error;
pub mod links;
pub mod locate;
pub mod primitives;
pub mod report;
pub mod sections;
pub mod taxonomy;
pub mod validate;

pub use error::*;
pub use report::*;

// Re-export entry-point functions at the crate root for convenience.
pub use basic_info::{BasicInfo, check_basic_info, extract_basic_info};
pub use detect::detect_sections;
pub use validate::{validate, validate_batch};

/// Result of the [`check`] convenience entry point: one report per input
/// document, mirroring the input shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum CheckOutput {
    Single(ValidationReport),
    Batch(Vec<ValidationReport>),
}

/// Convenience entry point composing parse → validate.
///
/// Accepts raw JSON text holding either a single document or an array of
/// documents. Parse failure is the only error; malformed resume content
/// is reported inside the returned reports.
pub fn check(input: &str) -> Result<CheckOutput, InputError> {
    let parsed: serde_json::Value =
        serde_json::from_str(input).map_err(|e| InputError::InvalidJson(e.to_string()))?;
    Ok(match parsed {
        serde_json::Value::Array(documents) => CheckOutput::Batch(validate_batch(&documents)),
        document => CheckOutput::Single(validate(&document)),
    })
}
