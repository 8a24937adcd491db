//! Diagnostic log sink port.
//!
//! A side-channel, not an audit trail: one line per forwarded payout,
//! best-effort, no durability or rotation guarantees. Swappable for a
//! structured telemetry backend without touching the forwarder.

use chrono::{DateTime, Utc};

/// Upper bound on the raw-response excerpt kept in a log record.
pub const RESPONSE_EXCERPT_MAX: usize = 1000;

/// One diagnostic record per forwarded payout request.
#[derive(Debug, Clone)]
pub struct PayoutLogRecord {
    pub timestamp: DateTime<Utc>,
    /// Resolved upstream URL.
    pub url: String,
    /// Serialized upstream payload (credential-free by construction).
    pub payload: serde_json::Value,
    /// Upstream HTTP status, absent when the transport call failed.
    pub status: Option<u16>,
    /// Transport error text, absent when a reply came back.
    pub transport_error: Option<String>,
    /// Raw response body, truncated to [`RESPONSE_EXCERPT_MAX`] characters.
    pub response_excerpt: String,
}

impl PayoutLogRecord {
    /// Builds a record, truncating the response excerpt.
    pub fn new(
        url: &str,
        payload: serde_json::Value,
        status: Option<u16>,
        transport_error: Option<String>,
        raw_response: &str,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            url: url.to_string(),
            payload,
            status,
            transport_error,
            response_excerpt: raw_response.chars().take(RESPONSE_EXCERPT_MAX).collect(),
        }
    }
}

/// Port trait for the diagnostic sink.
///
/// Appending is infallible from the caller's point of view: write failures
/// are swallowed by the adapter and never affect the client response.
#[async_trait::async_trait]
pub trait DiagnosticSink: Send + Sync + 'static {
    /// Appends one record. Each append must land as a single atomic line
    /// even under concurrent requests.
    async fn append(&self, record: &PayoutLogRecord);
}
