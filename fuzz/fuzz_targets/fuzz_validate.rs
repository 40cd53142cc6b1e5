#![no_main]

use libfuzzer_sys::fuzz_target;

// The full pipeline must produce a serializable report for any JSON input
// and a clean parse error for everything else.
fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    if let Ok(output) = resumecheck::check(&input) {
        let _ = serde_json::to_string(&output);
    }
});
