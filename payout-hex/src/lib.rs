//! # Payout Hex
//!
//! Application service layer and HTTP adapter for the payout proxy.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validation, routing, forwarding)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `G: PayoutGateway` and `S: DiagnosticSink`,
//! allowing different transport and log implementations to be injected.

pub mod inbound;
pub mod service;


pub use service::PayoutService;
