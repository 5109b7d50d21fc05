//! Telemetry helpers for hosts embedding `animated-charts`.
//!
//! Tracing setup stays explicit and opt-in. The demo binaries call
//! `init_default_tracing`; library consumers may wire their own subscriber
//! and filters instead. Reveal scheduling logs under `debug` and `trace`.

/// Default filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes a compact subscriber filtered by `RUST_LOG` or [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `fallback_filter` applies only when `RUST_LOG` is absent or unparsable.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
