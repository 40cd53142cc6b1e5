use resumecheck::locate::{
    extract_text, find_all_links, find_entry_field, find_field, key_matches, normalize_key,
};
use serde_json::json;

// ─── Normalization and matching ─────────────────────────────────────────────

#[test]
fn normalize_key_spellings() {
    assert_eq!(normalize_key("Work Experience"), "work_experience");
    assert_eq!(normalize_key("e-mail"), "e_mail");
    assert_eq!(normalize_key("already_snake"), "already_snake");
}

#[test]
fn key_matches_exact_and_affix() {
    assert!(key_matches("experience", &["experience"]));
    assert!(key_matches("Work-Experience", &["work_experience"]));
    // Affix forms on compound keys.
    assert!(key_matches("experience_section", &["experience"]));
    assert!(key_matches("work_experience", &["experience"]));
    // Substring without an underscore boundary is not a match.
    assert!(!key_matches("experienced", &["experience"]));
    assert!(!key_matches("inexperience", &["experience"]));
}

// ─── find_field ─────────────────────────────────────────────────────────────

#[test]
fn finds_top_level_then_nested() {
    let doc = json!({
        "profile": {"email": "nested@example.com"},
        "email": "top@example.com"
    });
    // Key order wins over depth of alias priority: the scan sees every own
    // key before descending.
    let found = find_field(&doc, &["email"]).unwrap();
    assert_eq!(found, &json!("top@example.com"));

    let nested_only = json!({"profile": {"contact": {"email": "deep@example.com"}}});
    assert_eq!(find_field(&nested_only, &["email"]).unwrap(), &json!("deep@example.com"));
}

#[test]
fn key_order_beats_alias_order() {
    let doc = json!({
        "mail": "second-alias@example.com",
        "email": "first-alias@example.com"
    });
    // "mail" appears first in the object even though "email" leads the
    // alias list.
    assert_eq!(
        find_field(&doc, &["email", "mail"]).unwrap(),
        &json!("second-alias@example.com")
    );
}

#[test]
fn null_match_counts_as_absent() {
    let doc = json!({"email": null, "mail": "fallback@example.com"});
    // The null hit ends the scan of its object; the sibling alias is never
    // reached.
    assert_eq!(find_field(&doc, &["email", "mail"]), None);
}

#[test]
fn searches_arrays_in_order() {
    let doc = json!({"entries": [{"a": 1}, {"email": "x@example.com"}]});
    assert_eq!(find_field(&doc, &["email"]).unwrap(), &json!("x@example.com"));
}

#[test]
fn entry_field_is_exact_match_only() {
    let entry = json!({"start_date_field": "2021", "startDate": "2020"});
    // No affix matching at entry level.
    assert_eq!(find_entry_field(&entry, &["start_date"]), None);
    assert_eq!(find_entry_field(&entry, &["startDate"]).unwrap(), &json!("2020"));
    // Case-insensitive.
    assert_eq!(find_entry_field(&json!({"TITLE": "Dev"}), &["title"]).unwrap(), &json!("Dev"));
}

// ─── Link harvesting ────────────────────────────────────────────────────────

#[test]
fn collects_links_with_source_keys() {
    let doc = json!({
        "github": "https://github.com/octocat",
        "bio": "no links here",
        "profiles": ["www.linkedin.com/in/octocat", {"site": "octocat.io"}]
    });
    let links = find_all_links(&doc);
    assert_eq!(
        links,
        vec![
            ("github".to_string(), "https://github.com/octocat".to_string()),
            ("list_item".to_string(), "www.linkedin.com/in/octocat".to_string()),
            ("site".to_string(), "octocat.io".to_string()),
        ]
    );
}

// ─── Text flattening ────────────────────────────────────────────────────────

#[test]
fn flattens_highlights() {
    assert_eq!(extract_text(&json!("plain")), "plain");
    assert_eq!(extract_text(&json!(["built x", "shipped y"])), "built x shipped y");
    assert_eq!(extract_text(&json!(["kept", null, "", "also kept"])), "kept also kept");
    assert_eq!(
        extract_text(&json!({"q1": "did a", "q2": ["did b", "did c"], "n": 3})),
        "did a did b did c"
    );
    assert_eq!(extract_text(&json!(42)), "");
}
