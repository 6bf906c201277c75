//! Error taxonomy for the gateway.
//!
//! The `Display` strings double as the user-facing error text attached
//! to gateway results, so their wording is part of the HTTP contract.

/// Errors produced below the gateway-operation boundary.
///
/// Every failure mode of a gateway call is classified into exactly one
/// of these variants; operations convert them into the `error` field of
/// their result object rather than propagating them.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Transport failure: connect error, timeout, TLS, unreadable body.
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a non-200 HTTP status.
    #[error("Failed to fetch data: {0}")]
    UpstreamStatus(u16),

    /// Upstream answered 200 but the envelope carries GraphQL errors.
    #[error("API Error: {0}")]
    UpstreamGraphQL(String),

    /// The envelope has no usable `data` object.
    #[error("No data received from API")]
    NoData,

    /// The addressed field is absent or empty. Non-fatal for list-shaped
    /// fields on the recent-challenges path (see [`crate::fallback`]).
    #[error("Empty field: {0}")]
    EmptyField(String),

    /// The extracted payload did not match the expected shape.
    #[error("Failed to decode field: {0}")]
    Decode(&'static str),

    /// Anything not covered above.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
