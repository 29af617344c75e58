//! Application Layer - Port definitions.
//!
//! This layer contains the port interfaces that define how the gateway
//! interacts with external systems.

/// Port interfaces for external systems (upstream quote API).
pub mod ports;
