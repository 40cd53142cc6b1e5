#![no_main]

use libfuzzer_sys::fuzz_target;
use resumecheck::primitives::{calculate_days, parse_date, validate_date};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let _ = parse_date(&input);
    let _ = validate_date(&input);
    // Self-difference of any string is zero whether or not it parses.
    assert_eq!(calculate_days(&input, &input), 0);
});
