use proptest::prelude::*;
use resumecheck::report::ValidationStatus;
use resumecheck::{validate, validate_batch};
use serde_json::{Value, json};

/// Strategy for arbitrary JSON values nested up to `depth` levels.
fn arb_json(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| json!(i)),
        "[a-zA-Z0-9 ./@-]{0,16}".prop_map(Value::String),
    ];

    leaf.prop_recursive(depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z][a-z0-9_]{0,10}", inner), 0..5).prop_map(|pairs| {
                let map: serde_json::Map<String, Value> = pairs.into_iter().collect();
                Value::Object(map)
            }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Any JSON value yields a well-formed report; only non-objects are ERROR.
    #[test]
    fn validate_is_total(document in arb_json(4)) {
        let report = validate(&document);
        if document.is_object() {
            prop_assert_ne!(report.validation_status, ValidationStatus::Error);
            prop_assert!(report.error.is_none());
            // The six report entries are always present, in fixed order.
            let names: Vec<&str> =
                report.validated_sections.iter().map(|(n, _)| n.as_str()).collect();
            prop_assert_eq!(
                names,
                ["experience", "education", "projects", "certifications", "links", "basic_info"]
            );
        } else {
            prop_assert_eq!(report.validation_status, ValidationStatus::Error);
            prop_assert!(report.validated_sections.is_empty());
        }
        // Reports always serialize.
        serde_json::to_string(&report).unwrap();
    }

    #[test]
    fn batch_is_order_preserving(documents in prop::collection::vec(arb_json(3), 0..5)) {
        let reports = validate_batch(&documents);
        prop_assert_eq!(reports.len(), documents.len());
        for (doc, report) in documents.iter().zip(&reports) {
            prop_assert_eq!(
                doc.is_object(),
                report.validation_status != ValidationStatus::Error
            );
        }
    }
}
