//! Public IP lookup port.

/// Error type for identity lookups. Transport failures only; an
/// undecodable reply maps to "no IP", not an error.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("{0}")]
    Transport(String),
}

/// Port trait for the external IP-echo service.
#[async_trait::async_trait]
pub trait IpLookup: Send + Sync + 'static {
    /// Returns the caller's public IP, or `None` when the echo service
    /// answered without a usable `ip` field.
    async fn public_ip(&self) -> Result<Option<String>, LookupError>;
}
