//! Error types for the payout proxy.

/// Application-level errors (for HTTP responses).
///
/// Every failure a payout request can hit is terminal for that request and
/// is surfaced to the client as a JSON body with an `error` field. Maps
/// cleanly to HTTP status codes in the inbound adapter.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body absent or not parseable as JSON (400).
    #[error("Invalid JSON body.")]
    InvalidInput,

    /// A required field is absent, empty, or zero (400).
    #[error("Missing required fields. Required: country, phoneNumber, amount, network.")]
    MissingFields,

    /// Amount is below the provider's payout threshold (400).
    #[error("Minimum payout amount is {minimum}.")]
    BelowMinimum { minimum: f64 },

    /// Provider credentials are not configured on this server (500).
    #[error("Server not configured. Missing FEEXPAY_API_KEY or SHOP_ID.")]
    ServerMisconfigured,

    /// No upstream endpoint exists for this country/network pair (400).
    #[error("Unable to determine the payout endpoint for this country/network.")]
    NoEndpoint,

    /// Transport-level failure reaching the upstream provider (502).
    #[error("Upstream connection failed: {0}")]
    UpstreamUnreachable(String),

    /// Upstream answered with a body that is not valid JSON (502).
    #[error("Invalid response from the payout provider")]
    UpstreamInvalidResponse { raw: String },

    /// Upstream answered with a non-2xx status; its own status and decoded
    /// body are propagated to the client.
    #[error("{message}")]
    UpstreamRejected {
        status: u16,
        message: String,
        details: serde_json::Value,
    },
}
