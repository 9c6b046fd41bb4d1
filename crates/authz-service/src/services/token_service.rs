//! Token issuance.
//!
//! Authenticates a principal against the injected credential source and
//! mints a signed, claim-bearing token on success.

use crate::config::Config;
use crate::crypto;
use crate::errors::AuthzError;
use crate::models::TokenResponse;
use crate::repositories::users::UserDirectory;
use chrono::Utc;
use common::jwt::Claims;
use common::secret::{ExposeSecret, SecretString};

/// Issue a token for a username/password pair.
///
/// Unknown usernames and wrong passwords are indistinguishable to the
/// caller: both cost one bcrypt verification (against a dummy hash when
/// the lookup misses) and both fail with [`AuthzError::InvalidCredentials`].
pub fn issue_user_token(
    directory: &dyn UserDirectory,
    config: &Config,
    username: &str,
    password: &SecretString,
) -> Result<TokenResponse, AuthzError> {
    let record = directory.find(username);

    // Equal work on the miss path so lookup outcome is not observable
    // through response timing.
    let hash_to_verify = match &record {
        Some(r) => r.password_hash.as_str(),
        None => crypto::DUMMY_PASSWORD_HASH,
    };

    let is_valid = crypto::verify_password(password.expose_secret(), hash_to_verify)?;

    let record = record.ok_or(AuthzError::InvalidCredentials)?;

    if !is_valid {
        tracing::debug!(target: "token_service", "Password mismatch for known principal");
        return Err(AuthzError::InvalidCredentials);
    }

    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: record.user_id.clone(),
        role: record.role,
        organization_id: record.organization_id,
        exp: now + config.token_ttl_secs,
        iat: now,
    };

    let token = crypto::sign_token(&claims, config.signing_key_bytes())?;

    tracing::info!(
        target: "token_service",
        subject = %record.user_id,
        ttl_secs = config.token_ttl_secs,
        "Issued token"
    );

    Ok(TokenResponse { token })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::PrincipalRecord;
    use crate::repositories::users::StaticUserDirectory;
    use std::collections::HashMap;

    fn test_config() -> Config {
        let vars = HashMap::from([(
            "SIGNING_SECRET".to_string(),
            "unit-test-signing-secret-0123456789abcdef".to_string(),
        )]);
        Config::from_vars(&vars).unwrap()
    }

    fn test_directory() -> StaticUserDirectory {
        StaticUserDirectory::new().with_user(
            "testuser",
            PrincipalRecord {
                user_id: "user-001".to_string(),
                password_hash: bcrypt::hash("password123", 4).unwrap(),
                role: "editor".to_string(),
                organization_id: "org-abc".to_string(),
            },
        )
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let config = test_config();
        let response = issue_user_token(
            &test_directory(),
            &config,
            "testuser",
            &SecretString::from("password123"),
        )
        .unwrap();

        let claims = crypto::verify_token(&response.token, config.signing_key_bytes()).unwrap();
        assert_eq!(claims.sub, "user-001");
        assert_eq!(claims.role, "editor");
        assert_eq!(claims.organization_id, "org-abc");
        assert_eq!(claims.exp - claims.iat, config.token_ttl_secs);
    }

    #[test]
    fn test_unknown_username_fails_with_uniform_error() {
        let result = issue_user_token(
            &test_directory(),
            &test_config(),
            "nobody",
            &SecretString::from("password123"),
        );

        assert!(matches!(result, Err(AuthzError::InvalidCredentials)));
    }

    #[test]
    fn test_wrong_password_fails_with_uniform_error() {
        let result = issue_user_token(
            &test_directory(),
            &test_config(),
            "testuser",
            &SecretString::from("wrong-password"),
        );

        assert!(matches!(result, Err(AuthzError::InvalidCredentials)));
    }

    #[test]
    fn test_error_does_not_reveal_which_factor_failed() {
        let unknown_user = issue_user_token(
            &test_directory(),
            &test_config(),
            "nobody",
            &SecretString::from("password123"),
        )
        .unwrap_err();

        let wrong_password = issue_user_token(
            &test_directory(),
            &test_config(),
            "testuser",
            &SecretString::from("wrong-password"),
        )
        .unwrap_err();

        assert_eq!(unknown_user.to_string(), wrong_password.to_string());
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let result = issue_user_token(
            &test_directory(),
            &test_config(),
            "",
            &SecretString::from(""),
        );

        assert!(matches!(result, Err(AuthzError::InvalidCredentials)));
    }

    #[test]
    fn test_token_honors_configured_ttl() {
        let vars = HashMap::from([
            (
                "SIGNING_SECRET".to_string(),
                "unit-test-signing-secret-0123456789abcdef".to_string(),
            ),
            ("TOKEN_TTL_SECS".to_string(), "120".to_string()),
        ]);
        let config = Config::from_vars(&vars).unwrap();

        let response = issue_user_token(
            &test_directory(),
            &config,
            "testuser",
            &SecretString::from("password123"),
        )
        .unwrap();

        let claims = crypto::verify_token(&response.token, config.signing_key_bytes()).unwrap();
        assert_eq!(claims.exp - claims.iat, 120);
    }
}
