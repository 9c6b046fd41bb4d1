use crate::models::arn::GatewayIdentity;
use common::secret::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Issued tokens live for one hour unless overridden.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Minimum accepted signing secret length in bytes.
///
/// HMAC-SHA-256 keys shorter than the hash output weaken the MAC, so a
/// short `SIGNING_SECRET` is a startup error rather than a warning.
pub const MIN_SIGNING_SECRET_BYTES: usize = 32;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_GATEWAY_REGION: &str = "ap-northeast-1";
const DEFAULT_GATEWAY_ACCOUNT_ID: &str = "123456789012";
const DEFAULT_GATEWAY_API_ID: &str = "local-api";
const DEFAULT_GATEWAY_STAGE: &str = "dev";

/// Process-wide service configuration.
///
/// Loaded once at startup and immutable afterwards. The signing secret is
/// the single source of truth shared by the token issuer and the decision
/// engine; neither holds its own copy of the value.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub signing_secret: SecretString,
    pub token_ttl_secs: i64,
    /// Deployment identity used to build requested-resource identifiers
    /// for inbound requests.
    pub gateway: GatewayIdentity,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Signing secret too short: {got} bytes (minimum 32)")]
    WeakSigningSecret { got: usize },

    #[error("Invalid token TTL: {0}")]
    InvalidTokenTtl(String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let signing_secret = vars
            .get("SIGNING_SECRET")
            .ok_or_else(|| ConfigError::MissingEnvVar("SIGNING_SECRET".to_string()))?;

        if signing_secret.len() < MIN_SIGNING_SECRET_BYTES {
            return Err(ConfigError::WeakSigningSecret {
                got: signing_secret.len(),
            });
        }

        let signing_secret = SecretString::from(signing_secret.clone());

        let token_ttl_secs = match vars.get("TOKEN_TTL_SECS") {
            Some(raw) => {
                let ttl: i64 = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidTokenTtl(raw.clone()))?;
                if ttl <= 0 {
                    return Err(ConfigError::InvalidTokenTtl(raw.clone()));
                }
                ttl
            }
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let gateway = GatewayIdentity {
            region: var_or(vars, "GATEWAY_REGION", DEFAULT_GATEWAY_REGION),
            account_id: var_or(vars, "GATEWAY_ACCOUNT_ID", DEFAULT_GATEWAY_ACCOUNT_ID),
            api_id: var_or(vars, "GATEWAY_API_ID", DEFAULT_GATEWAY_API_ID),
            stage: var_or(vars, "GATEWAY_STAGE", DEFAULT_GATEWAY_STAGE),
        };

        Ok(Config {
            bind_address,
            signing_secret,
            token_ttl_secs,
            gateway,
        })
    }

    /// The signing secret as raw key bytes for the MAC.
    #[must_use]
    pub fn signing_key_bytes(&self) -> &[u8] {
        self.signing_secret.expose_secret().as_bytes()
    }
}

fn var_or(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    vars.get(key).cloned().unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn test_secret() -> String {
        "a-test-signing-secret-of-sufficient-length".to_string()
    }

    #[test]
    fn test_from_vars_success() {
        let vars = HashMap::from([
            ("SIGNING_SECRET".to_string(), test_secret()),
            ("TOKEN_TTL_SECS".to_string(), "7200".to_string()),
            ("BIND_ADDRESS".to_string(), "127.0.0.1:9000".to_string()),
            ("GATEWAY_REGION".to_string(), "eu-west-1".to_string()),
        ]);

        let config = Config::from_vars(&vars).expect("Config should load successfully");

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.token_ttl_secs, 7200);
        assert_eq!(config.gateway.region, "eu-west-1");
        assert_eq!(config.gateway.account_id, DEFAULT_GATEWAY_ACCOUNT_ID);
        assert_eq!(config.signing_key_bytes(), test_secret().as_bytes());
    }

    #[test]
    fn test_from_vars_missing_signing_secret() {
        let vars = HashMap::new();

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(v)) if v == "SIGNING_SECRET"));
    }

    #[test]
    fn test_from_vars_short_signing_secret() {
        let vars = HashMap::from([("SIGNING_SECRET".to_string(), "too-short".to_string())]);

        let result = Config::from_vars(&vars);
        assert!(matches!(
            result,
            Err(ConfigError::WeakSigningSecret { got: 9 })
        ));
    }

    #[test]
    fn test_from_vars_default_ttl_and_bind_address() {
        let vars = HashMap::from([("SIGNING_SECRET".to_string(), test_secret())]);

        let config = Config::from_vars(&vars).expect("Config should load successfully");
        assert_eq!(config.token_ttl_secs, DEFAULT_TOKEN_TTL_SECS);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    }

    #[test]
    fn test_from_vars_non_numeric_ttl() {
        let vars = HashMap::from([
            ("SIGNING_SECRET".to_string(), test_secret()),
            ("TOKEN_TTL_SECS".to_string(), "an hour".to_string()),
        ]);

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidTokenTtl(v)) if v == "an hour"));
    }

    #[test]
    fn test_from_vars_zero_ttl_rejected() {
        let vars = HashMap::from([
            ("SIGNING_SECRET".to_string(), test_secret()),
            ("TOKEN_TTL_SECS".to_string(), "0".to_string()),
        ]);

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidTokenTtl(_))));
    }

    #[test]
    fn test_from_vars_negative_ttl_rejected() {
        let vars = HashMap::from([
            ("SIGNING_SECRET".to_string(), test_secret()),
            ("TOKEN_TTL_SECS".to_string(), "-60".to_string()),
        ]);

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::InvalidTokenTtl(_))));
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let vars = HashMap::from([("SIGNING_SECRET".to_string(), test_secret())]);

        let config = Config::from_vars(&vars).expect("Config should load successfully");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("a-test-signing-secret"));
    }
}
