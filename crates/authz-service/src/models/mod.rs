use serde::{Deserialize, Serialize};
use std::fmt;

pub mod arn;

/// Principal label used for every denied decision, regardless of cause.
pub const UNAUTHORIZED_PRINCIPAL: &str = "unauthorized";

/// The binary outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// Claim context forwarded to resource handlers on an Allow decision.
///
/// Wire names follow the reference gateway contract: `principalId` is
/// camel-cased, `organization_id` is not.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    #[serde(rename = "principalId")]
    pub principal_id: String,
    pub role: String,
    pub organization_id: String,
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("principal_id", &"[REDACTED]")
            .field("role", &self.role)
            .field("organization_id", &self.organization_id)
            .finish()
    }
}

/// A per-request authorization verdict.
///
/// Constructed fresh on every check and never persisted. `context` is
/// populated only on Allow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessDecision {
    #[serde(rename = "principalId")]
    pub principal_id: String,
    pub effect: Effect,
    #[serde(rename = "resourcePattern")]
    pub resource_pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<AuthContext>,
}

impl AccessDecision {
    /// An Allow decision scoped to `resource_pattern`, carrying the claim
    /// context for downstream handlers.
    #[must_use]
    pub fn allow(resource_pattern: String, context: AuthContext) -> Self {
        Self {
            principal_id: context.principal_id.clone(),
            effect: Effect::Allow,
            resource_pattern,
            context: Some(context),
        }
    }

    /// A Deny decision scoped to the requested resource verbatim.
    ///
    /// Every failure path produces this same shape; nothing in it hints
    /// at the underlying cause.
    #[must_use]
    pub fn deny(requested_resource: &str) -> Self {
        Self {
            principal_id: UNAUTHORIZED_PRINCIPAL.to_string(),
            effect: Effect::Deny,
            resource_pattern: requested_resource.to_string(),
            context: None,
        }
    }

    #[must_use]
    pub fn is_allow(&self) -> bool {
        self.effect == Effect::Allow
    }
}

/// Token issuance response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// A row in the credential source.
///
/// `password_hash` is a bcrypt verifier, never a plaintext password, and
/// is still redacted in Debug output.
#[derive(Clone)]
pub struct PrincipalRecord {
    pub user_id: String,
    pub password_hash: String,
    pub role: String,
    pub organization_id: String,
}

impl fmt::Debug for PrincipalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrincipalRecord")
            .field("user_id", &self.user_id)
            .field("password_hash", &"[REDACTED]")
            .field("role", &self.role)
            .field("organization_id", &self.organization_id)
            .finish()
    }
}

/// User list/read entry served by the echo handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
}

/// Mutation acknowledgement served by the echo handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatus {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub status: String,
}
