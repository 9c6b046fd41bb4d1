//! Fixed test fixtures shared across unit and E2E tests.

/// Deterministic signing secret used by test servers and token builders.
pub const TEST_SIGNING_SECRET: &str = "test-signing-secret-0123456789abcdef-0123";

/// Seeded test principal.
pub const TEST_USERNAME: &str = "testuser";
pub const TEST_PASSWORD: &str = "password123";
pub const TEST_USER_ID: &str = "user-001";
pub const TEST_ROLE: &str = "editor";
pub const TEST_ORG_ID: &str = "org-abc";

/// Reference method ARN and its expected stage-wide grant pattern.
pub const TEST_METHOD_ARN: &str =
    "arn:aws:execute-api:ap-northeast-1:123456789012:abcdef123/Prod/GET/hello";
pub const TEST_STAGE_PATTERN: &str =
    "arn:aws:execute-api:ap-northeast-1:123456789012:abcdef123/Prod/*/*";

/// Low bcrypt cost for fast test fixtures. Never use outside tests.
pub const TEST_BCRYPT_COST: u32 = 4;
