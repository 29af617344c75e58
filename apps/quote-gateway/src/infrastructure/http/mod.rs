//! HTTP Controller Module
//!
//! Axum router and DTOs for the gateway's public surface.

mod controller;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use request::SubscribeRequest;
pub use response::{ErrorResponse, HealthResponse, SubscribeResponse};
