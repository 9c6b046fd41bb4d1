//! # Authz Test Utilities
//!
//! Shared test utilities for the gateway authorizer service.
//!
//! This crate provides:
//! - Fixed test fixtures (signing secret, credentials, resource ARNs)
//! - Test data builders (`TestTokenBuilder`)
//! - Server test harness (`TestAuthServer` for E2E tests)
//! - Custom assertions (`TokenAssertions` trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use authz_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestAuthServer::spawn().await?;
//!     let token = server.issue_token(TEST_USERNAME, TEST_PASSWORD).await?;
//!
//!     token.assert_valid_hs256(TEST_SIGNING_SECRET);
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod server_harness;
pub mod token_builders;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;
pub use server_harness::*;
pub use token_builders::*;
