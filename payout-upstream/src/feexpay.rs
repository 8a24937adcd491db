//! HTTP adapter for the upstream payout provider.

use std::time::Duration;

use payout_types::{GatewayError, PayoutGateway, PayoutOrder, UpstreamReply};

/// One attempt per payout, bounded by this timeout. No retries.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-based [`PayoutGateway`] implementation.
pub struct FeexPayClient {
    http: reqwest::Client,
}

impl FeexPayClient {
    /// Creates the client with the provider call timeout applied.
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl PayoutGateway for FeexPayClient {
    async fn send_payout(
        &self,
        url: &str,
        api_key: &str,
        order: &PayoutOrder,
    ) -> Result<UpstreamReply, GatewayError> {
        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(order)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        // Reading the body can fail mid-stream; that is still a transport
        // failure, not an upstream rejection.
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(UpstreamReply { status, body })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
