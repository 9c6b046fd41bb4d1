//! The access decision engine.
//!
//! [`authorize`] is a total function: every input, however malformed,
//! resolves to a well-formed [`AccessDecision`]. No error crosses this
//! boundary and denials never say why.

use crate::crypto;
use crate::models::arn::MethodArn;
use crate::models::{AccessDecision, AuthContext};
use common::jwt::strip_bearer;
use std::str::FromStr;

/// Render an Allow/Deny decision for a presented credential header and a
/// requested resource identifier.
///
/// Decision pipeline, all failures collapsing to the same Deny:
///
/// 1. The header must be present and follow the `Bearer <token>` shape.
/// 2. The token must verify (size, signature, shape, expiry) against the
///    process signing secret; the clock is read here, per invocation.
/// 3. The requested resource must parse as a method ARN.
///
/// A successful check grants the whole deployment stage: the returned
/// pattern wildcards method and path so one verified token covers the
/// API surface without per-route re-verification. Denials stay scoped to
/// the requested resource verbatim.
pub fn authorize(
    signing_key: &[u8],
    token_header: Option<&str>,
    requested_resource: &str,
) -> AccessDecision {
    let Some(header) = token_header else {
        tracing::debug!(target: "authorizer", "Missing credential header");
        return AccessDecision::deny(requested_resource);
    };

    let Some(token) = strip_bearer(header) else {
        tracing::debug!(target: "authorizer", "Credential header is not a Bearer token");
        return AccessDecision::deny(requested_resource);
    };

    let claims = match crypto::verify_token(token, signing_key) {
        Ok(claims) => claims,
        Err(failure) => {
            // The kind stays in the logs; the decision is uniform.
            tracing::debug!(
                target: "authorizer",
                kind = failure.as_str(),
                "Token verification failed"
            );
            return AccessDecision::deny(requested_resource);
        }
    };

    let arn = match MethodArn::from_str(requested_resource) {
        Ok(arn) => arn,
        Err(e) => {
            tracing::debug!(
                target: "authorizer",
                error = %e,
                "Requested resource identifier did not parse"
            );
            return AccessDecision::deny(requested_resource);
        }
    };

    AccessDecision::allow(
        arn.stage_pattern(),
        AuthContext {
            principal_id: claims.sub,
            role: claims.role,
            organization_id: claims.organization_id,
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::Effect;
    use chrono::Utc;
    use common::jwt::Claims;

    const TEST_KEY: &[u8] = b"unit-test-signing-secret-0123456789abcdef";
    const SAMPLE_ARN: &str =
        "arn:aws:execute-api:ap-northeast-1:123456789012:abcdef123/Prod/GET/hello";
    const SAMPLE_PATTERN: &str =
        "arn:aws:execute-api:ap-northeast-1:123456789012:abcdef123/Prod/*/*";

    fn bearer_token(exp_offset_secs: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user-001".to_string(),
            role: "editor".to_string(),
            organization_id: "org-abc".to_string(),
            exp: now + exp_offset_secs,
            iat: now,
        };
        format!("Bearer {}", crypto::sign_token(&claims, TEST_KEY).unwrap())
    }

    fn assert_unauthorized_deny(decision: &AccessDecision, resource: &str) {
        assert_eq!(decision.effect, Effect::Deny);
        assert_eq!(decision.principal_id, "unauthorized");
        assert_eq!(decision.resource_pattern, resource);
        assert!(decision.context.is_none());
    }

    #[test]
    fn test_valid_token_allows_with_stage_pattern() {
        let decision = authorize(TEST_KEY, Some(&bearer_token(3600)), SAMPLE_ARN);

        assert_eq!(decision.effect, Effect::Allow);
        assert_eq!(decision.principal_id, "user-001");
        assert_eq!(decision.resource_pattern, SAMPLE_PATTERN);

        let context = decision.context.unwrap();
        assert_eq!(context.principal_id, "user-001");
        assert_eq!(context.role, "editor");
        assert_eq!(context.organization_id, "org-abc");
    }

    #[test]
    fn test_missing_header_denies() {
        let decision = authorize(TEST_KEY, None, SAMPLE_ARN);
        assert_unauthorized_deny(&decision, SAMPLE_ARN);
    }

    #[test]
    fn test_non_bearer_header_denies() {
        for header in ["Basic dXNlcjpwYXNz", "bearer lowercase", "", "Bearer"] {
            let decision = authorize(TEST_KEY, Some(header), SAMPLE_ARN);
            assert_unauthorized_deny(&decision, SAMPLE_ARN);
        }
    }

    #[test]
    fn test_garbage_token_denies() {
        let decision = authorize(TEST_KEY, Some("Bearer not-a-token"), SAMPLE_ARN);
        assert_unauthorized_deny(&decision, SAMPLE_ARN);
    }

    #[test]
    fn test_expired_token_denies() {
        let decision = authorize(TEST_KEY, Some(&bearer_token(-300)), SAMPLE_ARN);
        assert_unauthorized_deny(&decision, SAMPLE_ARN);
    }

    #[test]
    fn test_token_signed_with_other_secret_denies() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user-001".to_string(),
            role: "editor".to_string(),
            organization_id: "org-abc".to_string(),
            exp: now + 3600,
            iat: now,
        };
        let foreign = crypto::sign_token(&claims, b"a-completely-different-signing-secret!!");
        let header = format!("Bearer {}", foreign.unwrap());

        let decision = authorize(TEST_KEY, Some(&header), SAMPLE_ARN);
        assert_unauthorized_deny(&decision, SAMPLE_ARN);
    }

    #[test]
    fn test_valid_token_with_malformed_resource_denies() {
        for resource in ["", "not-an-arn", "arn:aws:execute-api:region:acct"] {
            let decision = authorize(TEST_KEY, Some(&bearer_token(3600)), resource);
            assert_unauthorized_deny(&decision, resource);
        }
    }

    #[test]
    fn test_decisions_are_idempotent() {
        let header = bearer_token(3600);

        let first = authorize(TEST_KEY, Some(&header), SAMPLE_ARN);
        let second = authorize(TEST_KEY, Some(&header), SAMPLE_ARN);

        assert_eq!(first.effect, second.effect);
        assert_eq!(first.principal_id, second.principal_id);
        assert_eq!(first.resource_pattern, second.resource_pattern);
        assert_eq!(first.context, second.context);
    }

    #[test]
    fn test_deny_looks_identical_across_failure_causes() {
        let missing = authorize(TEST_KEY, None, SAMPLE_ARN);
        let garbage = authorize(TEST_KEY, Some("Bearer zzz"), SAMPLE_ARN);
        let expired = authorize(TEST_KEY, Some(&bearer_token(-300)), SAMPLE_ARN);

        for decision in [&missing, &garbage, &expired] {
            assert_unauthorized_deny(decision, SAMPLE_ARN);
        }

        let missing_json = serde_json::to_value(&missing).unwrap();
        assert_eq!(missing_json, serde_json::to_value(&garbage).unwrap());
        assert_eq!(missing_json, serde_json::to_value(&expired).unwrap());
    }

    #[test]
    fn test_oversized_header_denies_without_panic() {
        let header = format!("Bearer {}", "a".repeat(1 << 20));
        let decision = authorize(TEST_KEY, Some(&header), SAMPLE_ARN);
        assert_unauthorized_deny(&decision, SAMPLE_ARN);
    }
}
