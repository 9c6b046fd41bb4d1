//! Credential source for the token issuer.
//!
//! The issuer depends only on the [`UserDirectory`] capability, so the
//! backing store is swappable. The shipped implementation is an
//! in-memory table seeded with the single development principal; a real
//! deployment injects a directory-backed implementation instead.

use crate::errors::AuthzError;
use crate::models::PrincipalRecord;
use std::collections::HashMap;

/// bcrypt work factor for seeded development credentials.
const SEED_BCRYPT_COST: u32 = 12;

/// Lookup capability over the principal store.
pub trait UserDirectory: Send + Sync {
    /// Find the principal registered under `username`, if any.
    fn find(&self, username: &str) -> Option<PrincipalRecord>;
}

/// In-memory username -> principal table.
#[derive(Debug, Clone, Default)]
pub struct StaticUserDirectory {
    users: HashMap<String, PrincipalRecord>,
}

impl StaticUserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a principal under `username`.
    #[must_use]
    pub fn with_user(mut self, username: &str, record: PrincipalRecord) -> Self {
        self.users.insert(username.to_string(), record);
        self
    }

    /// The development directory: one `testuser` principal.
    ///
    /// The password verifier is derived at construction so no hash
    /// literal lives in the source tree.
    pub fn seeded() -> Result<Self, AuthzError> {
        let password_hash = bcrypt::hash("password123", SEED_BCRYPT_COST)
            .map_err(|e| AuthzError::Crypto(format!("Seed hash generation failed: {}", e)))?;

        Ok(Self::new().with_user(
            "testuser",
            PrincipalRecord {
                user_id: "user-001".to_string(),
                password_hash,
                role: "editor".to_string(),
                organization_id: "org-abc".to_string(),
            },
        ))
    }
}

impl UserDirectory for StaticUserDirectory {
    fn find(&self, username: &str) -> Option<PrincipalRecord> {
        self.users.get(username).cloned()
    }
}
