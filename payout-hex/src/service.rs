//! Payout Application Service
//!
//! Orchestrates one forward-and-respond cycle through the gateway port.
//! Contains NO transport logic - pure validation, routing and response
//! mapping.

use payout_types::{
    AppError, Credentials, DEFAULT_MOTIF, DiagnosticSink, GatewayError, MIN_PAYOUT_AMOUNT,
    PayoutGateway, PayoutLogRecord, PayoutOrder, PayoutRequest, choose_endpoint,
};

/// Application service for the payout forwarder.
///
/// Generic over `G: PayoutGateway` and `S: DiagnosticSink` - the adapters
/// are injected at compile time. This enables:
/// - Swapping transports without code changes
/// - Testing with in-memory mocks
/// - Compile-time checks for port implementation
pub struct PayoutService<G: PayoutGateway, S: DiagnosticSink> {
    gateway: G,
    sink: S,
    credentials: Option<Credentials>,
}

impl<G: PayoutGateway, S: DiagnosticSink> PayoutService<G, S> {
    /// Creates a new payout service.
    ///
    /// Credentials are optional: an unconfigured server still starts, and
    /// every payout request then answers `ServerMisconfigured` without any
    /// outbound call.
    pub fn new(gateway: G, sink: S, credentials: Option<Credentials>) -> Self {
        Self {
            gateway,
            sink,
            credentials,
        }
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Returns a reference to the underlying diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Validates, routes and forwards one payout request.
    ///
    /// On success returns the upstream's decoded JSON body unchanged; every
    /// failure maps to one [`AppError`] kind. Exactly one diagnostic record
    /// is appended per attempted upstream call, whether it succeeded or not.
    pub async fn forward(&self, req: PayoutRequest) -> Result<serde_json::Value, AppError> {
        let country = non_empty(req.country).ok_or(AppError::MissingFields)?;
        let phone_number = non_empty(req.phone_number).ok_or(AppError::MissingFields)?;
        let network = non_empty(req.network).ok_or(AppError::MissingFields)?;
        // Zero counts as absent, matching the inbound contract.
        let amount = req
            .amount
            .filter(|a| *a != 0.0)
            .ok_or(AppError::MissingFields)?;

        if amount < MIN_PAYOUT_AMOUNT {
            return Err(AppError::BelowMinimum {
                minimum: MIN_PAYOUT_AMOUNT,
            });
        }

        let credentials = self
            .credentials
            .as_ref()
            .ok_or(AppError::ServerMisconfigured)?;

        let url = choose_endpoint(&country, &network).ok_or(AppError::NoEndpoint)?;

        let order = PayoutOrder {
            phone_number,
            amount,
            shop: credentials.shop_id.clone(),
            network,
            motif: req.motif.unwrap_or_else(|| DEFAULT_MOTIF.to_string()),
        };

        tracing::debug!(url, amount, "forwarding payout upstream");

        let result = self
            .gateway
            .send_payout(url, &credentials.api_key, &order)
            .await;

        self.log_outcome(url, &order, &result).await;

        let reply = match result {
            Ok(reply) => reply,
            Err(GatewayError::Transport(err)) => {
                tracing::warn!(url, error = %err, "upstream transport failure");
                return Err(AppError::UpstreamUnreachable(err));
            }
        };

        let decoded: serde_json::Value = serde_json::from_str(&reply.body)
            .map_err(|_| AppError::UpstreamInvalidResponse {
                raw: reply.body.clone(),
            })?;

        if !reply.is_success() {
            let message = decoded
                .get("message")
                .and_then(serde_json::Value::as_str)
                .or_else(|| decoded.get("error").and_then(serde_json::Value::as_str))
                .unwrap_or("Upstream payout API error")
                .to_string();
            return Err(AppError::UpstreamRejected {
                status: reply.status,
                message,
                details: decoded,
            });
        }

        Ok(decoded)
    }

    /// Best-effort diagnostic line for the attempted call.
    async fn log_outcome(
        &self,
        url: &str,
        order: &PayoutOrder,
        result: &Result<payout_types::UpstreamReply, GatewayError>,
    ) {
        let payload = serde_json::to_value(order).unwrap_or_default();
        let record = match result {
            Ok(reply) => PayoutLogRecord::new(url, payload, Some(reply.status), None, &reply.body),
            Err(GatewayError::Transport(err)) => {
                PayoutLogRecord::new(url, payload, None, Some(err.clone()), "")
            }
        };
        self.sink.append(&record).await;
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
