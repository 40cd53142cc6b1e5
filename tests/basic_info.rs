use resumecheck::{BasicInfo, check_basic_info, extract_basic_info};
use serde_json::json;

// ─── Contact-object probing ─────────────────────────────────────────────────

#[test]
fn contact_object_probed_with_exact_keys() {
    // Misspelled and vendor-specific key names are probed literally.
    let info = extract_basic_info(&json!({
        "personal_info": {
            "gmail": "dev@gmail.com",
            "mobile_number": "9876543210"
        }
    }));
    assert_eq!(info.email, "dev@gmail.com");
    assert!(info.email_valid);
    assert_eq!(info.phone, "9876543210");
    assert!(info.phone_valid);

    let info = extract_basic_info(&json!({"contacts": {"e-mail": "x@example.org"}}));
    assert_eq!(info.email, "x@example.org");
    assert!(info.email_valid);
}

#[test]
fn contact_lists_scanned_for_first_valid_entry() {
    let info = extract_basic_info(&json!({
        "contact": {
            "emails": ["broken", "good@example.com", "later@example.com"],
            "phone": ["12", "+91 98765 43210"]
        }
    }));
    assert_eq!(info.email, "good@example.com");
    assert_eq!(info.phone, "+91 98765 43210");
}

#[test]
fn contact_probe_recurses_into_nested_objects() {
    let info = extract_basic_info(&json!({
        "basics": {"reachability": {"email": "deep@example.com"}}
    }));
    assert_eq!(info.email, "deep@example.com");
    assert!(info.email_valid);
}

#[test]
fn contact_name_rescues_a_nulled_top_level_name() {
    // The null top-level hit ends the document-wide name search; the
    // contact object is probed by exact alias afterwards.
    let info = extract_basic_info(&json!({
        "name": null,
        "contact": {"name": "Ada King", "email": "ada@example.com"}
    }));
    assert_eq!(info.name, "Ada King");
}

// ─── Document-wide fallbacks ────────────────────────────────────────────────

#[test]
fn email_fallback_prefers_first_valid_list_element() {
    let info =
        extract_basic_info(&json!({"emails": ["nope", "real@example.com", "also@example.com"]}));
    assert_eq!(info.email, "real@example.com");
    assert!(info.email_valid);
}

#[test]
fn all_invalid_email_list_keeps_first_element() {
    let info = extract_basic_info(&json!({"email": ["not-an-email", "also-bad"]}));
    assert_eq!(info.email, "not-an-email");
    assert!(!info.email_valid);
}

#[test]
fn all_invalid_phone_list_keeps_the_sentinel() {
    // Unlike email, the phone list scan has no first-element fallback.
    let info = extract_basic_info(&json!({"phone": ["123", "45"]}));
    assert_eq!(info.phone, "unknown");
    assert!(!info.phone_valid);
}

#[test]
fn integer_phone_entries_accepted() {
    let info = extract_basic_info(&json!({"mobile": [987654321, 9876543210i64]}));
    assert_eq!(info.phone, "9876543210");
    assert!(info.phone_valid);
}

#[test]
fn scalar_fallbacks_record_actual_validity() {
    let info = extract_basic_info(&json!({"email": "broken@", "phone": "9876543210"}));
    assert_eq!(info.email, "broken@");
    assert!(!info.email_valid);
    assert_eq!(info.phone, "9876543210");
    assert!(info.phone_valid);
}

// ─── Identity chains ────────────────────────────────────────────────────────

#[test]
fn candidate_id_located_anywhere_in_the_document() {
    let info = extract_basic_info(&json!({"meta": {"applicant_id": 774}}));
    assert_eq!(info.candidate_id, "774");
}

#[test]
fn name_composed_from_separate_parts() {
    let info = extract_basic_info(&json!({"firstname": "Ada", "lastname": "Lovelace"}));
    assert_eq!(info.name, "Ada Lovelace");
}

#[test]
fn underscored_first_name_matches_the_name_alias_directly() {
    // "first_name" carries "name" as a suffix, so the affix-matching
    // document search wins before composition is attempted.
    let info = extract_basic_info(&json!({"first_name": "Ada", "last_name": "Lovelace"}));
    assert_eq!(info.name, "Ada");
}

#[test]
fn missing_identity_keeps_sentinels() {
    let info = extract_basic_info(&json!({"summary": "no identity here"}));
    assert_eq!(info, BasicInfo::default());
}

// ─── Format rules ───────────────────────────────────────────────────────────

#[test]
fn sentinel_fields_are_skipped() {
    assert!(check_basic_info(&BasicInfo::default()).is_empty());
}

#[test]
fn identity_format_issues_in_order() {
    let info = BasicInfo {
        email: "bad@".to_string(),
        phone: "12".to_string(),
        name: "A".to_string(),
        ..BasicInfo::default()
    };
    assert_eq!(
        check_basic_info(&info),
        ["Invalid email format: bad@", "Invalid phone number format: 12", "Invalid name format"]
    );
}
