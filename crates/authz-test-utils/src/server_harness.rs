//! Test server harness for E2E testing
//!
//! Provides `TestAuthServer` for spawning the real router on an
//! ephemeral port.

use crate::fixtures::{
    TEST_BCRYPT_COST, TEST_ORG_ID, TEST_PASSWORD, TEST_ROLE, TEST_SIGNING_SECRET, TEST_USERNAME,
    TEST_USER_ID,
};
use authz_service::config::Config;
use authz_service::handlers::auth_handler::AppState;
use authz_service::models::arn::GatewayIdentity;
use authz_service::models::PrincipalRecord;
use authz_service::repositories::users::StaticUserDirectory;
use authz_service::routes;
use common::secret::SecretString;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Test harness for spawning the gateway authorizer in E2E tests
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_auth_flow_e2e() -> Result<(), anyhow::Error> {
///     let server = TestAuthServer::spawn().await?;
///
///     let response = server
///         .client()
///         .post(format!("{}/api/v1/auth/token", server.url()))
///         .json(&credentials)
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestAuthServer {
    addr: SocketAddr,
    client: reqwest::Client,
    _handle: JoinHandle<()>,
}

impl TestAuthServer {
    /// Spawn a new test server instance.
    ///
    /// The server binds a random loopback port, uses the fixture signing
    /// secret and gateway identity, and serves a directory holding the
    /// single fixture principal (hashed at the fast test cost).
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        let config = Config {
            bind_address: "127.0.0.1:0".to_string(),
            signing_secret: SecretString::from(TEST_SIGNING_SECRET),
            token_ttl_secs: 3600,
            gateway: GatewayIdentity {
                region: "ap-northeast-1".to_string(),
                account_id: "123456789012".to_string(),
                api_id: "abcdef123".to_string(),
                stage: "Prod".to_string(),
            },
        };

        let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)
            .map_err(|e| anyhow::anyhow!("Failed to hash fixture password: {}", e))?;

        let directory = StaticUserDirectory::new().with_user(
            TEST_USERNAME,
            PrincipalRecord {
                user_id: TEST_USER_ID.to_string(),
                password_hash,
                role: TEST_ROLE.to_string(),
                organization_id: TEST_ORG_ID.to_string(),
            },
        );

        let state = Arc::new(AppState {
            config,
            directory: Arc::new(directory),
        });

        let app = routes::build_routes(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            _handle: handle,
        })
    }

    /// Base URL of the running server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shared HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Issue a token through the real issuance endpoint
    pub async fn issue_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, anyhow::Error> {
        let response = self
            .client
            .post(format!("{}/api/v1/auth/token", self.url()))
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Token issuance failed with status {}", response.status());
        }

        let body: serde_json::Value = response.json().await?;
        body["token"]
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| anyhow::anyhow!("Issuance response missing token field"))
    }
}
