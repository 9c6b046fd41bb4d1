//! JWT utilities shared across Turnstile components.
//!
//! This module provides the claim set carried by access tokens, the size
//! limit applied before any token parsing, the `Bearer` header extraction
//! helper, and the internal verification-failure taxonomy.
//!
//! # Security
//!
//! - Tokens are size-checked BEFORE parsing (DoS prevention)
//! - Generic error messages prevent information leakage: every
//!   [`VerificationFailure`] variant renders the same user-visible text
//! - The `sub` field in [`Claims`] is redacted in Debug output

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Maximum allowed JWT size in bytes (8KB).
///
/// Tokens larger than this are rejected before base64 decoding or signature
/// verification. Typical tokens issued by this service are 300-500 bytes;
/// the limit leaves room for growth while bounding the work an attacker can
/// force with an oversized `Authorization` header.
///
/// Per OWASP API Security Top 10 - API4:2023 (Unrestricted Resource Consumption)
pub const MAX_JWT_SIZE_BYTES: usize = 8192;

/// The credential header scheme accepted by the decision engine.
pub const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// Error Types
// =============================================================================

/// Internal verification-failure taxonomy.
///
/// All variants render the same message: callers outside the decision
/// engine must not be able to tell WHY a token was rejected. The variant
/// itself is logged at debug level for diagnostics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationFailure {
    /// Token size exceeds [`MAX_JWT_SIZE_BYTES`].
    #[error("The access token is invalid or expired")]
    TooLarge,

    /// Token is not a structurally valid JWT (encoding, JSON, claim shape,
    /// or an unexpected algorithm in the header).
    #[error("The access token is invalid or expired")]
    Malformed,

    /// Token `exp` claim is in the past.
    #[error("The access token is invalid or expired")]
    Expired,

    /// Signature does not verify against the signing secret.
    #[error("The access token is invalid or expired")]
    Signature,
}

impl VerificationFailure {
    /// Stable label for log fields.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationFailure::TooLarge => "too_large",
            VerificationFailure::Malformed => "malformed",
            VerificationFailure::Expired => "expired",
            VerificationFailure::Signature => "signature",
        }
    }
}

// =============================================================================
// Claims
// =============================================================================

/// Access token claims.
///
/// # Fields
///
/// - `sub`: Subject (principal identifier)
/// - `role`: Authorization role label
/// - `organization_id`: Tenant/organization scoping label
/// - `exp`: Expiration timestamp (Unix epoch seconds)
/// - `iat`: Issued-at timestamp (Unix epoch seconds)
///
/// # Security
///
/// The `sub` field is redacted in Debug output to prevent accidental
/// logging of principal identifiers.
#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal identifier) - redacted in Debug output.
    pub sub: String,

    /// Authorization role label.
    pub role: String,

    /// Tenant/organization scoping label.
    pub organization_id: String,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("sub", &"[REDACTED]")
            .field("role", &self.role)
            .field("organization_id", &self.organization_id)
            .field("exp", &self.exp)
            .field("iat", &self.iat)
            .finish()
    }
}

// =============================================================================
// Functions
// =============================================================================

/// Extract the token from a `Bearer <token>` credential header value.
///
/// Returns `None` when the header does not follow the Bearer scheme. The
/// check is an exact prefix match: schemes are case-sensitive here, as in
/// the reference gateway.
#[must_use]
pub fn strip_bearer(header: &str) -> Option<&str> {
    header.strip_prefix(BEARER_PREFIX)
}

// =============================================================================
// Tests
// =============================================================================
