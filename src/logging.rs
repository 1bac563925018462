//! Tracing setup
//!
//! Diagnostics go to stderr so that stdout stays clean for reports and chart
//! JSON. `RUST_LOG` overrides the default level.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

/// Initializes the global tracing subscriber once
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
