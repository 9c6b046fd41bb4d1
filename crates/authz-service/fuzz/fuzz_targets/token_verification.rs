#![no_main]

use authz_service::crypto;
use authz_service::services::authorizer_service;
use libfuzzer_sys::fuzz_target;

const FUZZ_KEY: &[u8] = b"fuzz-signing-secret-0123456789abcdef-0123";

fuzz_target!(|data: &[u8]| {
    // Fail-closed totality: arbitrary bytes presented as a token must
    // resolve to an error, never a panic.
    if let Ok(token) = std::str::from_utf8(data) {
        let _ = crypto::verify_token(token, FUZZ_KEY);

        // The full decision engine must stay total as well, for both the
        // credential header and the resource identifier position.
        let header = format!("Bearer {token}");
        let decision = authorizer_service::authorize(
            FUZZ_KEY,
            Some(&header),
            "arn:aws:execute-api:ap-northeast-1:123456789012:abcdef123/Prod/GET/hello",
        );
        assert_eq!(decision.principal_id, "unauthorized");

        let _ = authorizer_service::authorize(FUZZ_KEY, Some(token), token);
    }
});
