//! Pure domain logic: endpoint routing and process-wide credentials.

mod routing;

pub use routing::{CountryRoute, choose_endpoint, normalize_network, route_for_country};

/// Minimum payout amount accepted by the upstream provider.
pub const MIN_PAYOUT_AMOUNT: f64 = 5000.0;

/// Payout reason sent upstream when the client supplies none.
pub const DEFAULT_MOTIF: &str = "Paiement commission";

/// Upstream provider credentials, loaded once from the environment.
///
/// The API key travels only as a transport-level bearer header; the shop
/// identifier is injected into every upstream payload. Absence of either is
/// a server misconfiguration, not a per-request validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Bearer credential for the upstream API (no "Bearer " prefix).
    pub api_key: String,
    /// Merchant/shop identifier required on every payout call.
    pub shop_id: String,
}
