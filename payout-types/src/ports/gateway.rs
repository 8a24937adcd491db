//! Upstream payout gateway port.
//!
//! Implementations are HTTP clients against the provider API; tests use
//! in-memory mocks.

use crate::dto::PayoutOrder;

/// Error type for gateway operations.
///
/// Only transport-level failures live here (connect, timeout, read). An
/// upstream HTTP error status is NOT a gateway error; it comes back as a
/// normal [`UpstreamReply`] for the service to interpret.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{0}")]
    Transport(String),
}

/// Raw reply from the upstream provider, before any decoding.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port trait for the upstream payout provider.
#[async_trait::async_trait]
pub trait PayoutGateway: Send + Sync + 'static {
    /// Sends one payout order to the resolved endpoint.
    ///
    /// The API key is attached as a bearer credential at the transport
    /// level. A single attempt, bounded by the adapter's timeout; no
    /// retries.
    async fn send_payout(
        &self,
        url: &str,
        api_key: &str,
        order: &PayoutOrder,
    ) -> Result<UpstreamReply, GatewayError>;
}
