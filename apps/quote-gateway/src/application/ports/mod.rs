//! Port Interfaces
//!
//! Defines the interfaces (ports) for external systems. The HTTP controller
//! depends on these contracts rather than on concrete adapters, so tests can
//! substitute stub implementations.
//!
//! ## Driven Ports (Outbound)
//!
//! - `QuoteSourcePort`: Interface for upstream last-traded-price lookups

mod quote_source_port;

pub use quote_source_port::{QuoteSourceError, QuoteSourcePort};
