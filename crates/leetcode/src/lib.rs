//! LeetCode data-fetch gateway.
//!
//! Translates the public LeetCode GraphQL API into local view models:
//! a thin upstream client ([`client`]), a response normalizer that
//! classifies the GraphQL envelope ([`normalize`]), a fixed fallback
//! data set for the recent-challenges listing ([`fallback`]), and the
//! three gateway operations composing them ([`gateway`]).
//!
//! No operation lets an error escape its boundary: every outcome is
//! folded into a result object carrying either a payload or an error
//! string, never both.

pub mod client;
pub mod error;
pub mod fallback;
pub mod gateway;
pub mod models;
pub mod normalize;
pub mod queries;

pub use client::{RawResponse, UpstreamClient};
pub use error::GatewayError;
pub use gateway::LeetCodeGateway;
