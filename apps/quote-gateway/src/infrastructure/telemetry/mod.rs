//! Tracing Integration
//!
//! Configures structured logging via `tracing-subscriber`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: `quote_gateway=info`, noisy HTTP
//!   internals at warn)
//!
//! # Usage
//!
//! ```ignore
//! use quote_gateway::infrastructure::telemetry;
//!
//! // Initialize once at startup
//! telemetry::init();
//!
//! tracing::info!("Gateway starting");
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
#[allow(clippy::expect_used)]
pub fn init() {
    let env_filter = EnvFilter::from_default_env()
        .add_directive(
            "quote_gateway=info"
                .parse()
                .expect("static directive 'quote_gateway=info' is valid"),
        )
        .add_directive(
            "hyper=warn"
                .parse()
                .expect("static directive 'hyper=warn' is valid"),
        )
        .add_directive(
            "reqwest=warn"
                .parse()
                .expect("static directive 'reqwest=warn' is valid"),
        );

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
