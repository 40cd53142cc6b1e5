use chrono::NaiveDate;
use proptest::prelude::*;
use resumecheck::primitives::{calculate_days, parse_date, validate_date};

/// Strategy over well-formed ISO day dates.
fn arb_iso_date() -> impl Strategy<Value = (i32, u32, u32)> {
    (1950..2050i32, 1..=12u32, 1..=28u32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Day differences are antisymmetric for every pair of strings: either
    // both sides parse, or both directions collapse to zero.
    #[test]
    fn day_difference_antisymmetric(a in ".{0,30}", b in ".{0,30}") {
        prop_assert_eq!(calculate_days(&a, &b), -calculate_days(&b, &a));
    }

    #[test]
    fn iso_dates_round_trip((y, m, d) in arb_iso_date()) {
        let rendered = format!("{y:04}-{m:02}-{d:02}");
        prop_assert_eq!(parse_date(&rendered), NaiveDate::from_ymd_opt(y, m, d));
    }

    // Month precision completes to the first of the month.
    #[test]
    fn month_precision_is_first_of_month((y, m, _) in arb_iso_date()) {
        let parsed = parse_date(&format!("{y:04}-{m:02}")).unwrap();
        prop_assert_eq!(parsed, NaiveDate::from_ymd_opt(y, m, 1).unwrap());
    }

    // The validator is total: no input may panic it.
    #[test]
    fn validate_date_is_total(s in "\\PC{0,60}") {
        let _ = validate_date(&s);
    }

    // An end date equal to the start is never "before" it.
    #[test]
    fn same_day_difference_is_zero((y, m, d) in arb_iso_date()) {
        let rendered = format!("{y:04}-{m:02}-{d:02}");
        prop_assert_eq!(calculate_days(&rendered, &rendered), 0);
    }
}
