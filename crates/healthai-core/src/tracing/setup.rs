//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the HealthAI tracing/logging system.
///
/// `HEALTHAI_LOG` takes precedence over `default_level` and accepts the
/// usual per-target syntax: `HEALTHAI_LOG=healthai_risk=debug,tower_http=info`.
/// Falls back to `default_level` when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_level: &str, json: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("HEALTHAI_LOG")
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };

        // Another subscriber may already be global (e.g. in tests); keep it.
        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
