//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use payout_types::Credentials;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub log_path: PathBuf,
    /// Upstream credentials; `None` when either variable is unset, in which
    /// case the server starts but rejects payouts with a 500.
    pub credentials: Option<Credentials>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let log_path = env::var("PAYOUT_LOG_PATH")
            .unwrap_or_else(|_| "logs/feexpay.log".to_string())
            .into();

        let credentials = match (env::var("FEEXPAY_API_KEY"), env::var("SHOP_ID")) {
            (Ok(api_key), Ok(shop_id)) if !api_key.is_empty() && !shop_id.is_empty() => {
                Some(Credentials { api_key, shop_id })
            }
            _ => None,
        };

        Ok(Self {
            port,
            log_path,
            credentials,
        })
    }
}
