#![no_main]

use libfuzzer_sys::fuzz_target;
use resumecheck::locate::{find_all_links, find_field};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let Ok(value) = serde_json::from_str::<serde_json::Value>(&input) else {
        return;
    };
    // A located field is never JSON null.
    if let Some(found) = find_field(&value, &["email", "experience", "name", "id"]) {
        assert!(!found.is_null());
    }
    let _ = find_all_links(&value);
});
