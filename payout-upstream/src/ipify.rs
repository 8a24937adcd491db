//! HTTP adapter for the public IP-echo service.

use payout_types::{IpLookup, LookupError};

const IPIFY_URL: &str = "https://api.ipify.org?format=json";

/// reqwest-based [`IpLookup`] implementation.
///
/// Uses the client's default timeout behavior, unlike the payout gateway.
/// TODO: bound this call once the hosting timeouts are settled.
pub struct IpifyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl IpifyClient {
    pub fn new() -> Self {
        Self::with_endpoint(IPIFY_URL)
    }

    /// Points the lookup at a different echo service (tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for IpifyClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IpLookup for IpifyClient {
    async fn public_ip(&self) -> Result<Option<String>, LookupError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        // An undecodable body or a missing field is "no IP", not a failure.
        let ip = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("ip").and_then(|ip| ip.as_str().map(String::from)));

        Ok(ip)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, routing::get};

    async fn spawn_echo(body: &'static str) -> String {
        let app = Router::new().route("/", get(move || async move { body }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_extracts_ip_field() {
        let url = spawn_echo(r#"{"ip":"198.51.100.4"}"#).await;
        let client = IpifyClient::with_endpoint(url);

        let ip = client.public_ip().await.unwrap();

        assert_eq!(ip.as_deref(), Some("198.51.100.4"));
    }

    #[tokio::test]
    async fn test_undecodable_body_yields_none() {
        let url = spawn_echo("plain text").await;
        let client = IpifyClient::with_endpoint(url);

        assert_eq!(client.public_ip().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_ip_field_yields_none() {
        let url = spawn_echo(r#"{"address":"198.51.100.4"}"#).await;
        let client = IpifyClient::with_endpoint(url);

        assert_eq!(client.public_ip().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = IpifyClient::with_endpoint(format!("http://{}/", addr));

        assert!(matches!(
            client.public_ip().await,
            Err(LookupError::Transport(_))
        ));
    }
}
