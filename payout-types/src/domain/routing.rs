//! Country/network endpoint routing for the upstream payout API.
//!
//! The provider exposes one URL per country, except for Côte d'Ivoire and
//! Senegal where the URL also depends on the mobile network operator. The
//! table below is static provider configuration, not runtime data.

const GLOBAL_TRANSFER_URL: &str = "https://api.feexpay.me/api/payouts/public/transfer/global";

/// How payouts are routed for one country.
///
/// Either a single fixed URL (network is irrelevant) or a sub-route keyed by
/// normalized network name with an explicit fallback.
#[derive(Debug, Clone, Copy)]
pub enum CountryRoute {
    /// One URL for the whole country.
    Direct(&'static str),
    /// Per-network URLs, tried against the normalized operator name.
    ByNetwork {
        networks: &'static [(&'static str, &'static str)],
        default: Option<&'static str>,
    },
}

/// Looks up the routing entry for a country code.
///
/// Country keys are matched case-sensitively; clients send the canonical
/// upper-snake codes.
pub fn route_for_country(country: &str) -> Option<CountryRoute> {
    let route = match country {
        "BENIN" => CountryRoute::Direct(GLOBAL_TRANSFER_URL),
        "TOGO" => CountryRoute::Direct("https://api.feexpay.me/api/payouts/public/togo"),
        "COTE_DIVOIRE" => CountryRoute::ByNetwork {
            networks: &[
                ("MTN", "https://api.feexpay.me/api/payouts/public/mtn_ci"),
                ("ORANGE", "https://api.feexpay.me/api/payouts/public/orange_ci"),
                ("MOOV", "https://api.feexpay.me/api/payouts/public/moov_ci"),
                ("WAVE", "https://api.feexpay.me/api/payouts/public/wave_ci"),
            ],
            default: Some(GLOBAL_TRANSFER_URL),
        },
        "BURKINA_FASO" => CountryRoute::Direct(GLOBAL_TRANSFER_URL),
        "SENEGAL" => CountryRoute::ByNetwork {
            networks: &[
                ("ORANGE", "https://api.feexpay.me/api/payouts/public/orange_sn"),
                ("FREE", "https://api.feexpay.me/api/payouts/public/free_sn"),
            ],
            default: Some(GLOBAL_TRANSFER_URL),
        },
        "CONGO_BRAZZAVILLE" => {
            CountryRoute::Direct("https://api.feexpay.me/api/payouts/public/mtn_cg")
        }
        _ => return None,
    };
    Some(route)
}

/// Normalizes a free-form network name: uppercase, keep only `A-Z0-9`.
///
/// "Orange CI" becomes "ORANGECI", "mtn " becomes "MTN". Idempotent.
pub fn normalize_network(network: &str) -> String {
    network
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

/// Resolves the upstream URL for a country/network pair.
///
/// For sub-routed countries, three candidate keys are tried in order:
/// the normalized name, the plain-uppercased original, and the uppercased
/// first whitespace-delimited token. The first match wins; otherwise the
/// country's default route applies, if any.
pub fn choose_endpoint(country: &str, network: &str) -> Option<&'static str> {
    match route_for_country(country)? {
        CountryRoute::Direct(url) => Some(url),
        CountryRoute::ByNetwork { networks, default } => {
            let upper = network.to_uppercase();
            let first_token = upper.split_whitespace().next().unwrap_or("").to_string();
            let candidates = [normalize_network(network), upper.clone(), first_token];

            for candidate in &candidates {
                if let Some(&(_, url)) = networks.iter().find(|(key, _)| *key == candidate.as_str())
                {
                    return Some(url);
                }
            }
            default
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
