//! Builder patterns for test data construction
//!
//! Provides a fluent API for creating signed (and deliberately broken)
//! test tokens.

use crate::fixtures::{TEST_ORG_ID, TEST_ROLE, TEST_SIGNING_SECRET, TEST_USER_ID};
use chrono::{Duration, Utc};
use common::jwt::Claims;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

/// Builder for signed test tokens.
///
/// # Example
/// ```rust,ignore
/// let token = TestTokenBuilder::new()
///     .for_user("alice")
///     .with_role("viewer")
///     .expires_in(-60) // already expired
///     .build();
/// ```
pub struct TestTokenBuilder {
    sub: String,
    role: String,
    organization_id: String,
    exp: i64,
    iat: i64,
    secret: String,
}

impl TestTokenBuilder {
    /// Create a new token builder with the fixture defaults
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            sub: TEST_USER_ID.to_string(),
            role: TEST_ROLE.to_string(),
            organization_id: TEST_ORG_ID.to_string(),
            exp: (now + Duration::seconds(3600)).timestamp(),
            iat: now.timestamp(),
            secret: TEST_SIGNING_SECRET.to_string(),
        }
    }

    /// Set the subject (principal identifier)
    pub fn for_user(mut self, subject: &str) -> Self {
        self.sub = subject.to_string();
        self
    }

    /// Set the role claim
    pub fn with_role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    /// Set the organization claim
    pub fn in_org(mut self, organization_id: &str) -> Self {
        self.organization_id = organization_id.to_string();
        self
    }

    /// Set expiration in seconds from now (negative values produce an
    /// already-expired token)
    pub fn expires_in(mut self, seconds: i64) -> Self {
        self.exp = (Utc::now() + Duration::seconds(seconds)).timestamp();
        self
    }

    /// Sign with a secret other than the fixture default
    pub fn signed_with(mut self, secret: &str) -> Self {
        self.secret = secret.to_string();
        self
    }

    /// Build and sign the token
    pub fn build(self) -> String {
        let claims = Claims {
            sub: self.sub,
            role: self.role,
            organization_id: self.organization_id,
            exp: self.exp,
            iat: self.iat,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .expect("test token signing should not fail")
    }
}

impl Default for TestTokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Corrupt a token's signature while keeping it base64url-decodable.
pub fn tamper_signature(token: &str) -> String {
    let last = token.chars().last().unwrap_or('A');
    let replacement = if last == 'A' { 'B' } else { 'A' };
    let mut tampered = token.to_string();
    tampered.pop();
    tampered.push(replacement);
    tampered
}
