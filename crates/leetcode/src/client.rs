//! HTTP client for the upstream GraphQL endpoint.
//!
//! One POST per invocation, bounded by a fixed timeout. No retries and
//! no backoff: the timeout is the gateway's only resilience mechanism.

use std::time::Duration;

use serde_json::Value;

use crate::error::GatewayError;

/// The public LeetCode GraphQL endpoint.
pub const GRAPHQL_ENDPOINT: &str = "https://leetcode.com/graphql/";

/// Browser-like client signature. The upstream rejects requests without
/// a recognizable User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Upper bound on one upstream round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// An upstream HTTP response reduced to what the normalizer needs.
///
/// The body is only parsed for 2xx responses; failed responses carry
/// `Value::Null` since the normalizer classifies them by status alone.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// Client for a single GraphQL endpoint.
pub struct UpstreamClient {
    client: reqwest::Client,
    endpoint: String,
}

impl UpstreamClient {
    /// Create a client for the public LeetCode endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(GRAPHQL_ENDPOINT.to_string())
    }

    /// Create a client for a non-default endpoint (local stubs).
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Issue a single GraphQL POST.
    ///
    /// `variables` is omitted from the request body when null. Transport
    /// failures (connect, timeout, unreadable body) map to
    /// [`GatewayError::Network`]; non-2xx statuses are returned in the
    /// [`RawResponse`] for the normalizer to classify.
    pub async fn fetch(&self, query: &str, variables: Value) -> Result<RawResponse, GatewayError> {
        let mut body = serde_json::json!({ "query": query });
        if !variables.is_null() {
            body["variables"] = variables;
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|err| GatewayError::Network(err.to_string()))?
        } else {
            Value::Null
        };

        Ok(RawResponse { status, body })
    }
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}
