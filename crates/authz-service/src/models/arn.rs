//! Requested-resource descriptors.
//!
//! Inbound requests are identified by an execute-api method ARN of the
//! form `arn:aws:execute-api:{region}:{account}:{api}/{stage}/{METHOD}/{path}`.
//! The descriptor is parsed once per request and read-only afterwards;
//! the decision engine uses it to derive the stage-wide grant pattern.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Parse failure for a requested-resource identifier.
///
/// A malformed identifier is a hard parse error at this layer; the
/// decision engine converts it to a Deny rather than letting it escape.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArnParseError {
    #[error("expected 6 colon-delimited fields, found {found}")]
    ColonFields { found: usize },

    #[error("expected at least 2 slash-delimited resource fields, found {found}")]
    SlashFields { found: usize },
}

/// A parsed method ARN.
///
/// `http_method` and `path` are optional: a grant pattern like
/// `api/stage/*/*` carries only the first two slash-fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodArn {
    pub region: String,
    pub account_id: String,
    pub api_id: String,
    pub stage: String,
    pub http_method: Option<String>,
    pub path: Option<String>,
}

impl MethodArn {
    /// The wildcard pattern covering every method and path within this
    /// ARN's API deployment stage.
    #[must_use]
    pub fn stage_pattern(&self) -> String {
        format!(
            "arn:aws:execute-api:{}:{}:{}/{}/*/*",
            self.region, self.account_id, self.api_id, self.stage
        )
    }
}

impl FromStr for MethodArn {
    type Err = ArnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The resource field may itself contain ':' in path segments, so
        // cap the colon split at 6 fields and require all of them.
        let fields: Vec<&str> = s.splitn(6, ':').collect();
        let [_arn, _partition, _service, region, account_id, resource] = fields.as_slice() else {
            return Err(ArnParseError::ColonFields {
                found: fields.len(),
            });
        };

        // api-id/stage are mandatory; method and path follow on live
        // request ARNs. Cap at 4 so the path keeps its own slashes.
        let resource_fields: Vec<&str> = resource.splitn(4, '/').collect();
        let (api_id, stage) = match resource_fields.as_slice() {
            [api_id, stage, ..] => (*api_id, *stage),
            _ => {
                return Err(ArnParseError::SlashFields {
                    found: resource_fields.len(),
                })
            }
        };

        Ok(MethodArn {
            region: (*region).to_string(),
            account_id: (*account_id).to_string(),
            api_id: api_id.to_string(),
            stage: stage.to_string(),
            http_method: resource_fields.get(2).map(|m| (*m).to_string()),
            path: resource_fields.get(3).map(|p| (*p).to_string()),
        })
    }
}

/// The deployment identity this gateway answers for.
///
/// Used by the authorization middleware to rebuild the method ARN of each
/// inbound request before handing it to the decision engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayIdentity {
    pub region: String,
    pub account_id: String,
    pub api_id: String,
    pub stage: String,
}

impl GatewayIdentity {
    /// Build the method ARN for an inbound request.
    #[must_use]
    pub fn method_arn(&self, http_method: &str, path: &str) -> String {
        format!(
            "arn:aws:execute-api:{}:{}:{}/{}/{}/{}",
            self.region,
            self.account_id,
            self.api_id,
            self.stage,
            http_method,
            path.trim_start_matches('/')
        )
    }
}
