//! Opt-in tracing setup for hosts embedding `boxchart-rs`.
//!
//! The crate itself only emits events; installing a subscriber stays a host
//! decision. `init_default_tracing` offers a compact env-filtered default for
//! quick starts and headless tooling.

#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info";

/// Installs a default `tracing` subscriber.
///
/// Returns `true` on success, `false` when the `telemetry` feature is
/// disabled or another global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
