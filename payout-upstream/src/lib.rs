//! # Payout Upstream
//!
//! Outbound adapters for the payout proxy:
//! - `feexpay` - reqwest client against the FeexPay payout API
//! - `ipify` - reqwest client against the public IP-echo service
//! - `log_file` - append-only diagnostic log sink

mod feexpay;
mod ipify;
mod log_file;

pub use feexpay::FeexPayClient;
pub use ipify::IpifyClient;
pub use log_file::FileSink;
