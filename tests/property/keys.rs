use proptest::prelude::*;
use resumecheck::locate::{key_matches, normalize_key};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn normalization_is_idempotent(key in "[a-zA-Z0-9 _-]{0,20}") {
        let once = normalize_key(&key);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn separator_and_case_insensitive(word in "[a-z]{1,10}") {
        prop_assert_eq!(normalize_key(&word.to_uppercase()), normalize_key(&word));
        prop_assert_eq!(
            normalize_key(&format!("{word}-x")),
            normalize_key(&format!("{word} x"))
        );
    }

    #[test]
    fn every_pattern_matches_itself(pattern in "[a-z]{1,12}") {
        prop_assert!(key_matches(&pattern, &[pattern.as_str()]));
    }

    #[test]
    fn affix_forms_match(pattern in "[a-z]{1,12}", other in "[a-z]{1,6}") {
        let suffixed = format!("{pattern}_{other}");
        let prefixed = format!("{other}_{pattern}");
        prop_assert!(key_matches(&suffixed, &[pattern.as_str()]));
        prop_assert!(key_matches(&prefixed, &[pattern.as_str()]));
    }

    // Without an underscore boundary the compound key is a different key.
    #[test]
    fn plain_concatenation_does_not_match(pattern in "[a-z]{3,8}", tail in "[a-z]{1,4}") {
        let concatenated = format!("{pattern}{tail}");
        prop_assert!(!key_matches(&concatenated, &[pattern.as_str()]));
    }
}
