//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Inbound payout request from the client application.
///
/// Every field is optional at the serde level: a body that parses but lacks
/// required fields must surface as a `MissingFields` validation error, not a
/// deserialization failure. Validation lives in the service layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayoutRequest {
    /// Country code, matched case-sensitively against the routing table
    #[serde(default)]
    pub country: Option<String>,

    /// Recipient phone number; `phone` is accepted as a synonym
    #[serde(default, rename = "phoneNumber", alias = "phone")]
    pub phone_number: Option<String>,

    /// Payout amount; accepts a JSON number or a numeric string
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,

    /// Free-form mobile network operator name
    #[serde(default)]
    pub network: Option<String>,

    /// Caller-side user identifier, passed through but unused in routing
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,

    /// Payout reason; defaults to "Paiement commission"
    #[serde(default)]
    pub motif: Option<String>,
}

/// Accepts `10000`, `10000.5`, `"10000"` or null for the amount field.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        // "NaN"/"inf" parse to non-finite floats that would slip past the
        // minimum-amount check; treat them as missing.
        Some(serde_json::Value::String(s)) => {
            s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    })
}

/// Payload forwarded to the upstream payout provider.
///
/// Built from the validated request plus the configured shop identifier.
/// The API key never appears here; it travels as a bearer header only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutOrder {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub amount: f64,
    pub shop: String,
    pub network: String,
    pub motif: String,
}

/// Response of the identity lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// Caller's public IP as reported by the external echo service
    pub ip: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
