//! Custom assertions for token tests.

use common::jwt::Claims;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Fluent assertions over serialized tokens.
///
/// Assertion methods panic with a descriptive message on failure, which
/// is the desired behavior inside tests.
pub trait TokenAssertions {
    /// Assert the token verifies as HS256 under `secret`, returning the
    /// token for chaining.
    fn assert_valid_hs256(&self, secret: &str) -> &Self;

    /// Decode and return the claims, panicking when verification fails.
    fn decode_claims(&self, secret: &str) -> Claims;
}

impl TokenAssertions for str {
    fn assert_valid_hs256(&self, secret: &str) -> &Self {
        self.decode_claims(secret);
        self
    }

    fn decode_claims(&self, secret: &str) -> Claims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<Claims>(
            self,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => data.claims,
            Err(e) => panic!("Token failed verification: {e}"),
        }
    }
}
