//! Infrastructure Layer - Adapters and external integrations.
//!
//! This layer contains the concrete implementations of the port interfaces
//! defined in the application layer, plus configuration and telemetry.

/// Environment configuration.
pub mod config;

/// Axum HTTP controller for the gateway surface.
pub mod http;

/// Tracing subscriber bootstrap.
pub mod telemetry;

/// Upstox REST client adapter.
pub mod upstox;
