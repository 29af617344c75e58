#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Quote Gateway - Upstox Market Data Facade
//!
//! A thin HTTP facade that relays last-traded-price lookups to the Upstox
//! market data API and answers trivial health and subscription bookkeeping
//! requests. The gateway holds no durable state: every request is either
//! answered locally or reflected from exactly one outbound upstream call.
//!
//! # Layers (inside to outside)
//!
//! - **Domain**: Instrument identification
//!   - `instrument`: Market segment and `<SEGMENT>|<SYMBOL>` lookup keys
//!
//! - **Application**: Port definitions
//!   - `ports`: The `QuoteSourcePort` contract for upstream lookups
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `upstox`: REST client for the Upstox quote API
//!   - `http`: Axum controller for the gateway's public surface
//!   - `config`: Environment configuration
//!   - `telemetry`: Tracing subscriber bootstrap
//!
//! # Data Flow
//!
//! ```text
//! Client --> axum router --> QuoteSourcePort --> Upstox /market/quote/ltp
//!               |
//!               +--> /health and /subscribe answered locally
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Instrument identification with no external dependencies.
pub mod domain;

/// Application layer - Port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::instrument::{InstrumentKey, MarketSegment};

// Application ports
pub use application::ports::{QuoteSourceError, QuoteSourcePort};

// Infrastructure config
pub use infrastructure::config::{Credentials, GatewayConfig, ServerSettings};

// HTTP controller (for integration tests)
pub use infrastructure::http::{
    AppState, ErrorResponse, HealthResponse, SubscribeRequest, SubscribeResponse, create_router,
};

// Upstox adapter
pub use infrastructure::upstox::{UpstoxClient, UpstoxConfig, UpstoxError};

// Telemetry
pub use infrastructure::telemetry::init as init_telemetry;
