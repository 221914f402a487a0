//! Response types (Serialize)
//!
//! Dashboard payloads serialize the summary types from `hubstats-core`
//! directly; only the liveness endpoints have envelopes of their own.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct ReadinessResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
