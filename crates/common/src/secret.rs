//! Secret types for protecting sensitive values from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate. Use these for
//! all sensitive values: the signing secret, inbound passwords, and any
//! future credential material.
//!
//! `SecretString` implements `Debug` with redaction, so any struct that
//! derives `Debug` while holding one gets safe logging behavior for free.
//! Secrets are zeroized on drop.
//!
//! # Example
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct LoginRequest {
//!     username: String,
//!     password: SecretString,
//! }
//!
//! let req = LoginRequest {
//!     username: "alice".to_string(),
//!     password: SecretString::from("hunter2"),
//! };
//!
//! // Safe - password is redacted
//! let rendered = format!("{req:?}");
//! assert!(!rendered.contains("hunter2"));
//!
//! // Access requires an explicit expose_secret() call
//! let password: &str = req.password.expose_secret();
//! # assert_eq!(password, "hunter2");
//! ```

pub use secrecy::{ExposeSecret, SecretBox, SecretString};
