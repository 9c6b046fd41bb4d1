#![no_main]

use authz_service::models::arn::MethodArn;
use libfuzzer_sys::fuzz_target;
use std::str::FromStr;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parsing must never panic, and any successful parse must yield
        // a well-formed stage pattern.
        if let Ok(arn) = MethodArn::from_str(s) {
            let pattern = arn.stage_pattern();
            assert!(pattern.ends_with("/*/*"));
            assert!(pattern.starts_with("arn:aws:execute-api:"));
        }
    }
});
