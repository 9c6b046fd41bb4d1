//! Cryptographic operations: token signing/verification and password
//! checks.
//!
//! Tokens are HMAC-SHA-256 (HS256) JWTs signed with the process-wide
//! signing secret. Verification is fail-closed and reports its failure
//! kind only through [`VerificationFailure`], which renders a uniform
//! message; callers log the kind internally and must not surface it.

use crate::errors::AuthzError;
use bcrypt::verify as bcrypt_verify;
use common::jwt::{Claims, VerificationFailure, MAX_JWT_SIZE_BYTES};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Dummy bcrypt hash used to equalize work when a principal is unknown.
///
/// Verifying a candidate password against this hash costs the same as a
/// real verification, so lookup misses and hash mismatches are not
/// distinguishable by timing.
pub const DUMMY_PASSWORD_HASH: &str =
    "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewY5GyYqExt7YD3a";

/// Sign claims into a compact JWT with the signing secret.
pub fn sign_token(claims: &Claims, signing_key: &[u8]) -> Result<String, AuthzError> {
    let encoding_key = EncodingKey::from_secret(signing_key);
    let header = Header::new(Algorithm::HS256);

    encode(&header, claims, &encoding_key)
        .map_err(|e| AuthzError::Crypto(format!("JWT signing operation failed: {}", e)))
}

/// Verify a presented token against the signing secret.
///
/// Checks, in order: size limit (before any parsing), HS256 signature,
/// claim shape, and expiry. The expiry comparison uses the wall clock at
/// call time with zero leeway: a token whose `exp` has passed is rejected
/// no matter how valid its signature is.
pub fn verify_token(token: &str, signing_key: &[u8]) -> Result<Claims, VerificationFailure> {
    // Size gate before base64 decode or MAC work.
    if token.len() > MAX_JWT_SIZE_BYTES {
        tracing::debug!(
            target: "crypto",
            token_size = token.len(),
            max_size = MAX_JWT_SIZE_BYTES,
            "Token rejected: size exceeds maximum allowed"
        );
        return Err(VerificationFailure::TooLarge);
    }

    let decoding_key = DecodingKey::from_secret(signing_key);

    // Only HS256 is ever accepted; `alg: none` and algorithm-confusion
    // tokens fail structurally here.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        let failure = match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => VerificationFailure::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => VerificationFailure::Signature,
            _ => VerificationFailure::Malformed,
        };
        tracing::debug!(
            target: "crypto",
            kind = failure.as_str(),
            error = %e,
            "Token verification failed"
        );
        failure
    })?;

    Ok(token_data.claims)
}

/// Verify a candidate password against a bcrypt hash.
pub fn verify_password(candidate: &str, hash: &str) -> Result<bool, AuthzError> {
    bcrypt_verify(candidate, hash)
        .map_err(|e| AuthzError::Crypto(format!("Password verification failed: {}", e)))
}
