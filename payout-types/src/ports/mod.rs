//! Port traits implemented by outbound adapters.

mod gateway;
mod ip_lookup;
mod sink;

pub use gateway::{GatewayError, PayoutGateway, UpstreamReply};
pub use ip_lookup::{IpLookup, LookupError};
pub use sink::{DiagnosticSink, PayoutLogRecord, RESPONSE_EXCERPT_MAX};
