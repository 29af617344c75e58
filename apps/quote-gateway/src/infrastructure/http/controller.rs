//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API for the gateway endpoints. Health and subscribe are
//! answered locally; price lookups delegate to the `QuoteSourcePort`.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::application::ports::QuoteSourcePort;
use crate::domain::instrument::InstrumentKey;

use super::request::SubscribeRequest;
use super::response::{ErrorResponse, HealthResponse, SubscribeResponse};

/// Application state shared across handlers.
pub struct AppState<Q: QuoteSourcePort> {
    /// Quote source used by the price endpoint.
    pub quote_source: Arc<Q>,
}

impl<Q: QuoteSourcePort> Clone for AppState<Q> {
    fn clone(&self) -> Self {
        Self {
            quote_source: Arc::clone(&self.quote_source),
        }
    }
}

/// Create the HTTP router with all endpoints.
///
/// Cross-origin requests are permitted from any origin.
pub fn create_router<Q: QuoteSourcePort + 'static>(state: AppState<Q>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/subscribe", post(subscribe))
        .route("/price/{symbol}", get(price))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse { ok: true })
}

/// Subscribe endpoint: echoes the submitted symbols.
///
/// The body is read leniently. Absent or malformed input is treated as an
/// empty symbol list, never as a client error.
async fn subscribe(body: Bytes) -> impl IntoResponse {
    let request = SubscribeRequest::from_body(&body);
    Json(SubscribeResponse {
        subscribed: request.symbols,
    })
}

/// Price lookup endpoint: relays the upstream LTP payload verbatim.
async fn price<Q: QuoteSourcePort>(
    State(state): State<AppState<Q>>,
    Path(symbol): Path<String>,
) -> Response {
    let instrument = InstrumentKey::nse_equity(symbol);

    match state.quote_source.last_traded_price(&instrument).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => {
            tracing::error!(instrument = %instrument, error = %e, "upstream quote lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
