//! Upstox REST Adapter
//!
//! HTTP client for the Upstox market quote API, implementing the
//! `QuoteSourcePort` defined in the application layer.

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, UpstoxClient, UpstoxConfig};
pub use error::UpstoxError;
