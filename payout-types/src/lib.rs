//! # Payout Types
//!
//! Domain types and port traits for the payout proxy.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain logic (endpoint routing, credentials)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CountryRoute, Credentials, DEFAULT_MOTIF, MIN_PAYOUT_AMOUNT, choose_endpoint,
    normalize_network, route_for_country,
};
pub use dto::{PayoutOrder, PayoutRequest, WhoAmIResponse};
pub use error::AppError;
pub use ports::{
    DiagnosticSink, GatewayError, IpLookup, LookupError, PayoutGateway, PayoutLogRecord,
    RESPONSE_EXCERPT_MAX, UpstreamReply,
};
